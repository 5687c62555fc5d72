// src/page.rs: composes the blueprint page from a `Blueprint`.
//
// One `Section` per content category; every list item is keyed by the
// record's identity field.

use yew::prelude::*;

use crate::components::{Pill, Section};
use crate::content::{
    AnimationBeat, AudioItem, Blueprint, Hero, PaletteColor, StoryBeat, TechnicalSpec,
    TypographyEntry, WorkflowStep,
};

/// Fixed header copy for one section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub intro: Option<&'static str>,
}

pub const STORY_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Narrative Breakdown",
    title: "Story Beats & Emotional Arc",
    intro: Some("Mapping the voiceover into distinct motion segments ensures pacing stays sharp while reinforcing the narrative tension."),
};

pub const VISUAL_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Visual Direction",
    title: "Lookframe Palette & Typography System",
    intro: Some("Leverage contrast between warning signals and rational clarity to visualize biased vs process-driven thinking."),
};

pub const MOTION_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Motion Strategy",
    title: "Scene-by-Scene Animation Playbook",
    intro: Some("Each block is timed to the voiceover waveform markers with deliberate transitions to sustain engagement and deliver clarity."),
};

pub const SOUND_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Sound Design",
    title: "Audio Bed, Voice, and Sync",
    intro: Some("Audio direction emphasises clarity of message while adding cinematic cues aligned with visual momentum."),
};

pub const SPECS_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Specs",
    title: "Delivery Requirements",
    intro: Some("Set project parameters upfront to avoid redraws and maintain consistency across exports."),
};

pub const WORKFLOW_SECTION: SectionCopy = SectionCopy {
    eyebrow: "Production Workflow",
    title: "Efficient Alight Motion Pipeline",
    intro: Some("Structured phases keep revisions tight and make client feedback loops fast."),
};

const TYPOGRAPHY_HEADING: &str = "Typography Hierarchy";

/// 1-based, zero-padded position shown in a workflow badge.
pub fn step_badge(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Inline style giving a swatch its fill straight from the palette value.
pub fn swatch_style(value: &str) -> String {
    format!("background: {value}")
}

fn section(copy: SectionCopy, body: Html) -> Html {
    html! {
        <Section
            eyebrow={copy.eyebrow}
            title={copy.title}
            intro={copy.intro.map(AttrValue::Static)}
        >
            { body }
        </Section>
    }
}

// ---------- fragments ----------

fn hero_block(hero: &Hero) -> Html {
    html! {
        <header class="hero">
            <Pill label={hero.badge} />
            <div class="hero-copy">
                <h1 class="hero-title">{ hero.headline }</h1>
                <p class="hero-summary">{ hero.summary }</p>
                <div class="script-panel">
                    <p class="script-label">{ hero.script_label }</p>
                    // The HTML parser drops a newline directly after `<pre>`; the
                    // inner span keeps a leading newline in the script.
                    <pre class="script"><span class="script-text">{ hero.script }</span></pre>
                </div>
            </div>
        </header>
    }
}

fn story_beat_card(beat: &StoryBeat) -> Html {
    html! {
        <div key={beat.label} class="card beat-card">
            <h3 class="card-title">{ beat.label }</h3>
            <p class="card-text">{ beat.focus }</p>
            <p class="beat-pacing">{ format!("Pacing: {}", beat.pacing) }</p>
        </div>
    }
}

fn palette_card(color: &PaletteColor) -> Html {
    html! {
        <div key={color.name} class="card swatch-card">
            <div class="swatch-head">
                <div class="swatch-name">{ color.name }</div>
                <span class="swatch-value">{ color.value }</span>
            </div>
            <div class="swatch" style={swatch_style(color.value)}></div>
            <p class="swatch-usage">{ color.usage }</p>
        </div>
    }
}

fn typography_item(entry: &TypographyEntry) -> Html {
    html! {
        <li key={entry.family} class="type-entry">
            <p class="type-family">{ entry.family }</p>
            <p class="type-role">{ entry.role }</p>
        </li>
    }
}

fn typography_panel(entries: &[TypographyEntry], tip: &'static str) -> Html {
    html! {
        <div class="card type-panel">
            <h3 class="type-heading">{ TYPOGRAPHY_HEADING }</h3>
            <ul class="type-list">
                { for entries.iter().map(typography_item) }
            </ul>
            <div class="type-tip">{ tip }</div>
        </div>
    }
}

fn animation_row(beat: &AnimationBeat) -> Html {
    html! {
        <div key={beat.stage} class="card stage-row">
            <div class="stage-meta">
                <p class="stage-duration">{ beat.duration }</p>
                <h3 class="stage-title">{ beat.stage }</h3>
            </div>
            <ul class="stage-actions">
                { for beat.actions.iter().map(|action| html! {
                    <li key={*action} class="action">
                        <span class="bullet"></span>
                        <span>{ *action }</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

fn audio_card(item: &AudioItem) -> Html {
    html! {
        <div key={item.element} class="card audio-card">
            <h3 class="card-title">{ item.element }</h3>
            <p class="card-text">{ item.notes }</p>
        </div>
    }
}

fn spec_card(spec: &TechnicalSpec) -> Html {
    html! {
        <div key={spec.spec} class="card spec-card">
            <p class="spec-name">{ spec.spec }</p>
            <p class="spec-detail">{ spec.detail }</p>
        </div>
    }
}

fn workflow_row(index: usize, step: &WorkflowStep) -> Html {
    html! {
        <div key={step.title} class="card step-row">
            <span class="step-badge">{ step_badge(index) }</span>
            <div>
                <h3 class="step-title">{ step.title }</h3>
                <p class="card-text">{ step.detail }</p>
            </div>
        </div>
    }
}

// ---------- page ----------

#[derive(Properties, PartialEq)]
pub struct PageProps {
    #[prop_or_default]
    pub content: Blueprint,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let content = &props.content;

    html! {
        <main class="page">
            { hero_block(&content.hero) }

            { section(STORY_SECTION, html! {
                <div class="grid beat-grid">
                    { for content.story_beats.iter().map(story_beat_card) }
                </div>
            }) }

            { section(VISUAL_SECTION, html! {
                <div class="visual-layout">
                    <div class="grid-tight palette-grid">
                        { for content.palette.iter().map(palette_card) }
                    </div>
                    { typography_panel(content.typography, content.typography_tip) }
                </div>
            }) }

            { section(MOTION_SECTION, html! {
                <div class="stack">
                    { for content.animation_beats.iter().map(animation_row) }
                </div>
            }) }

            { section(SOUND_SECTION, html! {
                <div class="grid-tight audio-grid">
                    { for content.audio_plan.iter().map(audio_card) }
                </div>
            }) }

            { section(SPECS_SECTION, html! {
                <div class="grid-tight spec-grid">
                    { for content.technical_specs.iter().map(spec_card) }
                </div>
            }) }

            { section(WORKFLOW_SECTION, html! {
                <div class="stack-tight">
                    { for content.workflow_steps.iter().enumerate().map(|(i, step)| workflow_row(i, step)) }
                </div>
            }) }

            <footer class="footer">{ content.footer }</footer>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badges_are_one_based_and_zero_padded() {
        assert_eq!(step_badge(0), "01");
        assert_eq!(step_badge(8), "09");
        assert_eq!(step_badge(9), "10");
        assert_eq!(step_badge(10), "11");
        assert_eq!(step_badge(99), "100");
    }

    #[test]
    fn swatch_fill_is_the_palette_value() {
        assert_eq!(swatch_style("#70C1B3"), "background: #70C1B3");
        assert_eq!(
            swatch_style("rgba(37, 122, 167, 0.25)"),
            "background: rgba(37, 122, 167, 0.25)"
        );
    }

    #[test]
    fn every_section_has_intro_copy() {
        for copy in [
            STORY_SECTION,
            VISUAL_SECTION,
            MOTION_SECTION,
            SOUND_SECTION,
            SPECS_SECTION,
            WORKFLOW_SECTION,
        ] {
            assert!(!copy.eyebrow.is_empty());
            assert!(copy.intro.is_some_and(|intro| !intro.is_empty()));
        }
    }
}
