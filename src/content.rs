// src/content.rs: production plan content for the Confirmation Bias reel.
//
// Tables are plain `const` data; a `Blueprint` bundles them so the page can be
// rendered from any set of tables (tests build their own).

use std::collections::HashSet;

use crate::error::{BlueprintError, BlueprintResult};
use crate::theme::is_color_expression;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryBeat {
    pub label: &'static str,
    pub focus: &'static str,
    pub pacing: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    /// Any CSS colour expression; used verbatim as the swatch fill.
    pub value: &'static str,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypographyEntry {
    pub family: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationBeat {
    pub stage: &'static str,
    pub duration: &'static str,
    /// Motion instructions in execution order.
    pub actions: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioItem {
    pub element: &'static str,
    pub notes: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnicalSpec {
    pub spec: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowStep {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub badge: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub script_label: &'static str,
    /// Pre-translated voiceover, shown verbatim.
    pub script: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blueprint {
    pub hero: Hero,
    pub story_beats: &'static [StoryBeat],
    pub palette: &'static [PaletteColor],
    pub typography: &'static [TypographyEntry],
    pub typography_tip: &'static str,
    pub animation_beats: &'static [AnimationBeat],
    pub audio_plan: &'static [AudioItem],
    pub technical_specs: &'static [TechnicalSpec],
    pub workflow_steps: &'static [WorkflowStep],
    pub footer: &'static str,
}

impl Default for Blueprint {
    fn default() -> Self {
        BLUEPRINT
    }
}

impl Blueprint {
    /// Data-integrity pass over every table.
    ///
    /// Identity keys double as render keys, so they must be non-empty and
    /// unique per category. Returns the first violation found.
    pub fn validate(&self) -> BlueprintResult<()> {
        ensure_unique_keys("story beats", self.story_beats.iter().map(|b| b.label))?;
        ensure_unique_keys("palette", self.palette.iter().map(|c| c.name))?;
        ensure_unique_keys("typography", self.typography.iter().map(|t| t.family))?;
        ensure_unique_keys("animation beats", self.animation_beats.iter().map(|b| b.stage))?;
        ensure_unique_keys("audio plan", self.audio_plan.iter().map(|a| a.element))?;
        ensure_unique_keys("technical specs", self.technical_specs.iter().map(|s| s.spec))?;
        ensure_unique_keys("workflow steps", self.workflow_steps.iter().map(|s| s.title))?;

        for color in self.palette {
            if !is_color_expression(color.value) {
                return Err(BlueprintError::invalid_color(
                    format!("palette '{}'", color.name),
                    color.value,
                ));
            }
        }

        for beat in self.animation_beats {
            if beat.actions.is_empty() {
                return Err(BlueprintError::EmptyActions {
                    stage: beat.stage.to_string(),
                });
            }
            let mut seen = HashSet::new();
            for action in beat.actions {
                if !seen.insert(*action) {
                    return Err(BlueprintError::DuplicateAction {
                        stage: beat.stage.to_string(),
                        action: action.to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            story_beats = self.story_beats.len(),
            palette = self.palette.len(),
            animation_beats = self.animation_beats.len(),
            workflow_steps = self.workflow_steps.len(),
            "blueprint content validated"
        );
        Ok(())
    }
}

fn ensure_unique_keys<'a>(
    category: &'static str,
    keys: impl IntoIterator<Item = &'a str>,
) -> BlueprintResult<()> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.trim().is_empty() {
            return Err(BlueprintError::EmptyKey { category });
        }
        if !seen.insert(key) {
            return Err(BlueprintError::DuplicateKey {
                category,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

// ---------- shipped content ----------

pub const HERO: Hero = Hero {
    badge: "Motion Design Blueprint",
    headline: "Confirmation Bias Reel — Production Plan for Alight Motion",
    summary: "A modular, loop-ready motion graphics treatment guiding investors from emotional bias to disciplined process.",
    script_label: "Original Script (Hindi)",
    script: "क्या आपने कभी सिर्फ़ वही ख़बरें पढ़ीं जो आपके शेयर को सही साबित करती हैं?\n\
यही है कन्फ़र्मेशन बायस।\n\
\n\
हम वही देखते हैं जो हम देखना चाहते हैं,\n\
और जो चेतावनी हमारी सोच के ख़िलाफ़ जाती है, उसे नज़रअंदाज़ कर देते हैं।\n\
नतीजा? ग़लत फ़ैसले और बढ़ता नुकसान।\n\
\n\
हर निवेश से पहले ख़ुद से पूछिए: मेरे विचार के ख़िलाफ़ सबूत क्या है?\n\
भावनाओं पर नहीं, प्रोसेस पर भरोसा कीजिए।",
};

pub const SCRIPT_BEATS: &[StoryBeat] = &[
    StoryBeat {
        label: "Hook",
        focus: "An investor scrolls a feed where every headline agrees with them and every ticker flashes green.",
        pacing: "Fast cuts, 0–4s",
    },
    StoryBeat {
        label: "Naming the Bias",
        focus: "Freeze the scroll and stamp the term on screen as the voiceover defines confirmation bias.",
        pacing: "Punchy hold, 4–8s",
    },
    StoryBeat {
        label: "The Echo Chamber",
        focus: "Contrary reports fade to grey while agreeing notes glow and orbit the investor.",
        pacing: "Measured build, 8–16s",
    },
    StoryBeat {
        label: "The Cost",
        focus: "Ignored warnings stack up until the portfolio line bends sharply downward.",
        pacing: "Slow tension, 16–22s",
    },
    StoryBeat {
        label: "The Process",
        focus: "A checklist slides in that deliberately hunts for disconfirming evidence before each trade.",
        pacing: "Steady rhythm, 22–30s",
    },
    StoryBeat {
        label: "Resolution",
        focus: "A balanced scale settles and the call to action invites viewers to audit every thesis.",
        pacing: "Calm landing, 30–35s",
    },
];

pub const COLOR_PALETTE: &[PaletteColor] = &[
    PaletteColor {
        name: "Bias Red",
        value: "#F25F5C",
        usage: "Warning pulses, one-sided headlines and the echo chamber glow.",
    },
    PaletteColor {
        name: "Clarity Teal",
        value: "#70C1B3",
        usage: "Process callouts, checklist ticks and the disciplined-investor path.",
    },
    PaletteColor {
        name: "Deep Dusk",
        value: "#247BA0",
        usage: "Backgrounds for data panels, chart grids and transitions.",
    },
    PaletteColor {
        name: "Graphite",
        value: "#50514F",
        usage: "Neutral chrome, lower thirds and faded contrary evidence.",
    },
    PaletteColor {
        name: "Signal Sand",
        value: "#FFE066",
        usage: "Keyword highlights and the closing call to action.",
    },
];

pub const TYPOGRAPHY: &[TypographyEntry] = &[
    TypographyEntry {
        family: "Plus Jakarta Sans",
        role: "Display headlines, numeric callouts and English kinetic type.",
    },
    TypographyEntry {
        family: "Inter",
        role: "Body copy, captions and on-screen data labels.",
    },
    TypographyEntry {
        family: "Noto Sans Devanagari",
        role: "Hindi subtitles and mixed-language title cards.",
    },
];

pub const TYPOGRAPHY_TIP: &str = "Tip: Keep Hindi overlays in vector for crisp scaling; pre-compose mixed-language titles for easier easing.";

pub const ANIMATION_BEATS: &[AnimationBeat] = &[
    AnimationBeat {
        stage: "Opening Hook",
        duration: "00:00 – 00:04",
        actions: &[
            "Vertical feed scrolls upward with motion blur at 120% speed.",
            "Green ticker chips pop in on each beat of the music bed.",
            "Snap zoom onto the investor's confident face.",
        ],
    },
    AnimationBeat {
        stage: "Define the Bias",
        duration: "00:04 – 00:08",
        actions: &[
            "Hard freeze-frame with a short white flash.",
            "Title card types on in Hindi and English with staggered easing.",
            "Underline sweeps across the key term in Signal Sand.",
        ],
    },
    AnimationBeat {
        stage: "Echo Chamber",
        duration: "00:08 – 00:16",
        actions: &[
            "Agreeing notes orbit the investor on a slow parallax ring.",
            "Contrary reports desaturate to Graphite and drift out of frame.",
            "Camera pushes in to tighten the circle.",
        ],
    },
    AnimationBeat {
        stage: "Consequences",
        duration: "00:16 – 00:22",
        actions: &[
            "Warning icons stack with a Bias Red pulse on each impact.",
            "Portfolio line draws on, then bends downward with an overshoot ease.",
            "Subtle screen shake on the final drop.",
        ],
    },
    AnimationBeat {
        stage: "Process Reset",
        duration: "00:22 – 00:30",
        actions: &[
            "Checklist panel slides in from the right on a Clarity Teal card.",
            "Each item ticks in sync with voiceover markers.",
            "Contrary evidence returns to full colour and lines up beside the thesis.",
        ],
    },
    AnimationBeat {
        stage: "Close and CTA",
        duration: "00:30 – 00:35",
        actions: &[
            "Balance scale eases to level with a soft settle.",
            "Call-to-action lockup scales in over Deep Dusk.",
            "Hold the final frame for a clean loop point.",
        ],
    },
];

pub const AUDIO_PLAN: &[AudioItem] = &[
    AudioItem {
        element: "Voiceover",
        notes: "Warm, conversational Hindi read; record at 48 kHz and leave room for on-screen captions.",
    },
    AudioItem {
        element: "Music Bed",
        notes: "Minimal pulse that thins out during the echo chamber and resolves to a brighter key for the process reset.",
    },
    AudioItem {
        element: "Sound Effects",
        notes: "Soft UI ticks for checklist items, a low thud for warning stacks and a whoosh on every scene transition.",
    },
    AudioItem {
        element: "Sync Markers",
        notes: "Drop markers on the waveform at each sentence break so motion beats land on the voiceover.",
    },
];

pub const TECHNICAL_SPECS: &[TechnicalSpec] = &[
    TechnicalSpec {
        spec: "Canvas",
        detail: "1080 × 1920, 9:16 vertical for Reels and Shorts.",
    },
    TechnicalSpec {
        spec: "Frame Rate",
        detail: "30 fps project and export; keep keyframes on whole frames.",
    },
    TechnicalSpec {
        spec: "Duration",
        detail: "35 seconds including a one-second loop-friendly tail.",
    },
    TechnicalSpec {
        spec: "Safe Zones",
        detail: "Keep text 150 px clear of the top and 250 px clear of the bottom for platform UI.",
    },
    TechnicalSpec {
        spec: "Export",
        detail: "H.264 MP4, high bitrate, AAC 320 kbps audio.",
    },
    TechnicalSpec {
        spec: "Project Backup",
        detail: "Share the Alight Motion project link plus fonts and audio stems in one folder.",
    },
];

pub const WORKFLOW_STEPS: &[WorkflowStep] = &[
    WorkflowStep {
        title: "Script Lock",
        detail: "Confirm the Hindi voiceover and mark sentence breaks for timing.",
    },
    WorkflowStep {
        title: "Storyboard",
        detail: "Sketch one frame per story beat and agree on the emotional arc.",
    },
    WorkflowStep {
        title: "Asset Build",
        detail: "Create vector icons, charts and title cards as reusable groups.",
    },
    WorkflowStep {
        title: "Animatic",
        detail: "Lay stills against the voiceover to validate pacing before motion work.",
    },
    WorkflowStep {
        title: "Motion Pass",
        detail: "Animate each scene with shared easing presets and transition templates.",
    },
    WorkflowStep {
        title: "Sound Pass",
        detail: "Layer music and effects, then balance levels against the voiceover.",
    },
    WorkflowStep {
        title: "Review and Export",
        detail: "Collect one consolidated round of feedback, apply fixes and export the final render.",
    },
];

pub const FOOTER: &str = "Crafted for agile delivery in Alight Motion — ready for Vercel deployment.";

pub const BLUEPRINT: Blueprint = Blueprint {
    hero: HERO,
    story_beats: SCRIPT_BEATS,
    palette: COLOR_PALETTE,
    typography: TYPOGRAPHY,
    typography_tip: TYPOGRAPHY_TIP,
    animation_beats: ANIMATION_BEATS,
    audio_plan: AUDIO_PLAN,
    technical_specs: TECHNICAL_SPECS,
    workflow_steps: WORKFLOW_STEPS,
    footer: FOOTER,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_blueprint_is_valid() {
        BLUEPRINT.validate().unwrap();
        assert!(BLUEPRINT.animation_beats.iter().all(|b| !b.actions.is_empty()));
        assert_eq!(HERO.script.lines().count(), 9);
    }

    #[test]
    fn duplicate_key_is_reported() {
        const STEPS: &[WorkflowStep] = &[
            WorkflowStep { title: "Review", detail: "first" },
            WorkflowStep { title: "Export", detail: "second" },
            WorkflowStep { title: "Review", detail: "third" },
        ];
        let content = Blueprint {
            workflow_steps: STEPS,
            ..BLUEPRINT
        };
        match content.validate() {
            Err(BlueprintError::DuplicateKey { category, key }) => {
                assert_eq!(category, "workflow steps");
                assert_eq!(key, "Review");
            }
            other => panic!("expected duplicate key, got {other:?}"),
        }
    }

    #[test]
    fn blank_key_is_reported() {
        const BEATS: &[StoryBeat] = &[StoryBeat { label: "  ", focus: "x", pacing: "y" }];
        let content = Blueprint {
            story_beats: BEATS,
            ..BLUEPRINT
        };
        assert!(matches!(
            content.validate(),
            Err(BlueprintError::EmptyKey { category: "story beats" })
        ));
    }

    #[test]
    fn animation_actions_must_be_present_and_distinct() {
        const EMPTY: &[AnimationBeat] = &[AnimationBeat {
            stage: "Silent",
            duration: "00:00",
            actions: &[],
        }];
        let content = Blueprint {
            animation_beats: EMPTY,
            ..BLUEPRINT
        };
        assert!(matches!(
            content.validate(),
            Err(BlueprintError::EmptyActions { stage }) if stage == "Silent"
        ));

        const REPEATED: &[AnimationBeat] = &[AnimationBeat {
            stage: "Loop",
            duration: "00:00",
            actions: &["Spin", "Spin"],
        }];
        let content = Blueprint {
            animation_beats: REPEATED,
            ..BLUEPRINT
        };
        assert!(matches!(
            content.validate(),
            Err(BlueprintError::DuplicateAction { action, .. }) if action == "Spin"
        ));
    }

    #[test]
    fn palette_values_must_be_colors() {
        const PALETTE: &[PaletteColor] = &[PaletteColor {
            name: "Mystery",
            value: "not a colour",
            usage: "none",
        }];
        let content = Blueprint {
            palette: PALETTE,
            ..BLUEPRINT
        };
        assert!(matches!(
            content.validate(),
            Err(BlueprintError::InvalidColor { value, .. }) if value == "not a colour"
        ));

        const PADDED: &[PaletteColor] = &[PaletteColor {
            name: "Accent",
            value: " #70C1B3 ",
            usage: "CTA",
        }];
        let content = Blueprint {
            palette: PADDED,
            ..BLUEPRINT
        };
        assert!(matches!(
            content.validate(),
            Err(BlueprintError::InvalidColor { value, .. }) if value == " #70C1B3 "
        ));
    }
}
