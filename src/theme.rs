//! Design tokens and the stylesheet generated from them.
//!
//! Components only ever reference semantic class names; every colour, font
//! family and shadow they end up using is resolved through the CSS custom
//! properties emitted by [`stylesheet`].

use serde::{Deserialize, Serialize};

use crate::error::{BlueprintError, BlueprintResult};

const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTokens {
    pub primary: String,
    pub accent: String,
    pub dusk: String,
    pub twilight: String,
    pub sand: String,
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self {
            primary: "#F25F5C".to_string(),
            accent: "#70C1B3".to_string(),
            dusk: "#247BA0".to_string(),
            twilight: "#50514F".to_string(),
            sand: "#FFE066".to_string(),
        }
    }
}

impl ColorTokens {
    /// Token name and value pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", &self.primary),
            ("accent", &self.accent),
            ("dusk", &self.dusk),
            ("twilight", &self.twilight),
            ("sand", &self.sand),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontTokens {
    /// Headings and hero title.
    pub display: String,
    /// Body copy and the preformatted script.
    pub copy: String,
}

impl Default for FontTokens {
    fn default() -> Self {
        Self {
            display: "Plus Jakarta Sans".to_string(),
            copy: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowTokens {
    pub focus: String,
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            focus: "0 10px 35px rgba(37, 122, 167, 0.25)".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ColorTokens,
    pub fonts: FontTokens,
    pub shadows: ShadowTokens,
}

impl Theme {
    pub fn validate(&self) -> BlueprintResult<()> {
        for (name, value) in self.colors.entries() {
            if !is_color_expression(value) {
                return Err(BlueprintError::invalid_color(
                    format!("theme color '{name}'"),
                    value,
                ));
            }
        }

        for (role, family) in [("display", &self.fonts.display), ("copy", &self.fonts.copy)] {
            if family.trim().is_empty() {
                return Err(BlueprintError::config(format!("font '{role}' is empty")));
            }
            if !is_family_name(family) {
                return Err(BlueprintError::config(format!(
                    "font '{role}' may only contain letters, digits, spaces and hyphens"
                )));
            }
        }

        if !is_css_safe(&self.shadows.focus) {
            return Err(BlueprintError::config(
                "shadow 'focus' contains characters not allowed in CSS values",
            ));
        }

        Ok(())
    }

    /// Google Fonts stylesheet URL loading both font families.
    pub fn font_stylesheet_url(&self) -> String {
        let families = [&self.fonts.display, &self.fonts.copy]
            .iter()
            .map(|family| format!("family={}:wght@400;500;600;700", family.trim().replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&");
        format!("{GOOGLE_FONTS_CSS}?{families}&display=swap")
    }
}

/// Whether `value` can be used directly as a CSS colour: hex notation,
/// `rgb()/rgba()/hsl()/hsla()` functional notation, or a bare keyword.
/// Surrounding whitespace is rejected since values are rendered as given.
pub fn is_color_expression(value: &str) -> bool {
    if value.is_empty() || value.trim() != value || !is_css_safe(value) {
        return false;
    }

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    if let Some(open) = value.find('(') {
        let func = value[..open].to_ascii_lowercase();
        let args = &value[open + 1..];
        return matches!(func.as_str(), "rgb" | "rgba" | "hsl" | "hsla")
            && args.len() > 1
            && args.ends_with(')')
            && !args[..args.len() - 1].contains(['(', ')']);
    }

    value.chars().all(|c| c.is_ascii_alphabetic())
}

// Family names go into both a quoted CSS string and the Google Fonts query,
// where only `+` stands in for spaces.
fn is_family_name(family: &str) -> bool {
    family
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == ' ' || c == '-')
}

// The stylesheet is emitted as text inside <style>, where markup characters
// would be escaped, and must not let a value close its declaration.
fn is_css_safe(value: &str) -> bool {
    !value.contains(['<', '>', '&', ';', '{', '}'])
}

/// Full page stylesheet: the token block followed by the component rules.
pub fn stylesheet(theme: &Theme) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in theme.colors.entries() {
        css.push_str(&format!("  --color-{name}: {value};\n"));
    }
    css.push_str(&format!(
        "  --font-display: \"{}\", ui-sans-serif, system-ui, sans-serif;\n",
        theme.fonts.display.trim()
    ));
    css.push_str(&format!(
        "  --font-copy: \"{}\", ui-sans-serif, system-ui, sans-serif;\n",
        theme.fonts.copy.trim()
    ));
    css.push_str(&format!("  --shadow-focus: {};\n", theme.shadows.focus));
    css.push_str("}\n");
    css.push_str(COMPONENT_CSS);
    css
}

const COMPONENT_CSS: &str = r#"
* { box-sizing: border-box; }
body {
  margin: 0;
  min-height: 100vh;
  background: radial-gradient(circle at top, color-mix(in srgb, var(--color-dusk) 35%, #05060a) 0%, #05060a 60%);
  color: #f3f4f6;
  font-family: var(--font-copy);
  -webkit-font-smoothing: antialiased;
}
h1, h2, h3, p, ul, pre { margin: 0; }
ul { padding: 0; list-style: none; }

.page {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 80px;
  max-width: 72rem;
  min-height: 100vh;
  margin: 0 auto;
  padding: 64px 24px;
}

.hero { display: flex; flex-direction: column; gap: 40px; }
.hero-copy { display: flex; flex-direction: column; gap: 24px; }
.pill {
  align-self: flex-start;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.05);
  padding: 4px 12px;
  font-size: 0.75rem;
  font-weight: 500;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: rgba(255, 255, 255, 0.8);
}
.hero-title {
  max-width: 48rem;
  font-family: var(--font-display);
  font-size: 2.25rem;
  line-height: 1.1;
  color: #ffffff;
}
.hero-summary { max-width: 48rem; font-size: 1.125rem; color: #d1d5db; }
.script-panel {
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 1.5rem;
  background: rgba(255, 255, 255, 0.03);
  padding: 24px;
  font-size: 0.875rem;
  color: #9ca3af;
  box-shadow: var(--shadow-focus);
}
.script-label { font-weight: 600; color: #e5e7eb; }
.script {
  margin-top: 12px;
  white-space: pre-wrap;
  font-family: var(--font-copy);
  line-height: 1.625;
  color: #d1d5db;
}

.section { display: flex; flex-direction: column; gap: 24px; }
.section-header { display: flex; flex-direction: column; gap: 12px; }
.section-eyebrow {
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.3em;
  color: color-mix(in srgb, var(--color-sand) 80%, transparent);
}
.section-title { font-family: var(--font-display); font-size: 1.875rem; color: #ffffff; }
.section-intro { max-width: 48rem; font-size: 1rem; color: #d1d5db; }
.gradient-border {
  border-radius: 1.75rem;
  padding: 1px;
  background: linear-gradient(135deg, color-mix(in srgb, var(--color-accent) 60%, transparent), color-mix(in srgb, var(--color-dusk) 40%, transparent), color-mix(in srgb, var(--color-primary) 50%, transparent));
}
.section-body { border-radius: calc(1.75rem - 1px); background: #0b0d14; padding: 24px; }

.grid { display: grid; gap: 24px; }
.grid-tight { display: grid; gap: 16px; }
.stack { display: flex; flex-direction: column; gap: 20px; }
.stack-tight { display: flex; flex-direction: column; gap: 16px; }

.card {
  border: 1px solid rgba(255, 255, 255, 0.05);
  border-radius: 1rem;
  background: rgba(255, 255, 255, 0.05);
  padding: 20px;
}
.card-title { font-size: 1.125rem; font-weight: 600; color: #ffffff; }
.card-text { margin-top: 8px; font-size: 0.875rem; color: #d1d5db; }
.beat-card { transition: border-color 150ms, background 150ms; }
.beat-card:hover {
  border-color: color-mix(in srgb, var(--color-accent) 60%, transparent);
  background: color-mix(in srgb, var(--color-accent) 10%, transparent);
}
.beat-pacing {
  margin-top: 12px;
  font-size: 0.75rem;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: color-mix(in srgb, var(--color-accent) 80%, transparent);
}

.visual-layout { display: grid; gap: 24px; }
.swatch-card { display: flex; flex-direction: column; justify-content: space-between; padding: 16px; }
.swatch-head { display: flex; align-items: center; justify-content: space-between; }
.swatch-name { font-size: 0.875rem; font-weight: 600; color: #ffffff; }
.swatch-value { font-size: 0.75rem; color: #9ca3af; }
.swatch {
  margin-top: 16px;
  height: 64px;
  width: 100%;
  border-radius: 0.75rem;
  box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
}
.swatch-usage { margin-top: 16px; font-size: 0.75rem; color: #d1d5db; }

.type-panel { display: flex; flex-direction: column; gap: 16px; padding: 24px; }
.type-heading { font-size: 1rem; font-weight: 600; color: #ffffff; }
.type-list { display: flex; flex-direction: column; gap: 12px; font-size: 0.875rem; }
.type-family { font-weight: 600; color: #ffffff; }
.type-role { font-size: 0.75rem; color: #9ca3af; }
.type-tip {
  border: 1px dashed rgba(255, 255, 255, 0.1);
  border-radius: 0.75rem;
  background: rgba(255, 255, 255, 0.05);
  padding: 16px;
  font-size: 0.75rem;
  color: #9ca3af;
}

.stage-row { background: rgba(255, 255, 255, 0.04); }
.stage-duration {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: color-mix(in srgb, var(--color-accent) 80%, transparent);
}
.stage-title { margin-top: 8px; font-size: 1.125rem; font-weight: 600; color: #ffffff; }
.stage-actions {
  display: flex;
  flex-direction: column;
  gap: 8px;
  margin-top: 16px;
  font-size: 0.875rem;
  color: #d1d5db;
}
.action { display: flex; gap: 12px; }
.bullet {
  flex: none;
  margin-top: 4px;
  height: 8px;
  width: 8px;
  border-radius: 9999px;
  background: var(--color-accent);
}

.spec-card { display: flex; flex-direction: column; gap: 8px; padding: 16px; background: rgba(255, 255, 255, 0.04); }
.spec-name { font-size: 0.875rem; font-weight: 600; color: #ffffff; }
.spec-detail { font-size: 0.875rem; color: #d1d5db; }

.step-row { display: flex; gap: 16px; padding: 16px; }
.step-badge {
  display: flex;
  flex: none;
  align-items: center;
  justify-content: center;
  height: 40px;
  width: 40px;
  border-radius: 9999px;
  background: color-mix(in srgb, var(--color-dusk) 40%, transparent);
  font-weight: 700;
  color: #ffffff;
}
.step-title { font-size: 0.875rem; font-weight: 600; color: #ffffff; }

.footer {
  padding-bottom: 48px;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.3em;
  color: #6b7280;
}

@media (min-width: 640px) {
  .palette-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .spec-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (min-width: 768px) {
  .page { padding-top: 80px; padding-bottom: 80px; }
  .hero-title { font-size: 3.75rem; }
  .hero-summary { font-size: 1.25rem; }
  .script-panel { max-width: 36rem; }
  .section-title { font-size: 2.25rem; }
  .section-body { padding: 32px; }
  .beat-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .audio-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .stage-row { display: flex; align-items: flex-start; gap: 24px; }
  .stage-meta { width: 16rem; flex: none; }
  .stage-actions { margin-top: 0; flex: 1; }
}

@media (min-width: 1024px) {
  .visual-layout { grid-template-columns: 2fr 1fr; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_expressions() {
        for ok in ["#70C1B3", "#fff", "#ffff", "#00000080", "rgb(1, 2, 3)", "RGBA(1,2,3,0.5)", "hsl(200 50% 40%)", "teal"] {
            assert!(is_color_expression(ok), "{ok} should be accepted");
        }
        for bad in ["", "#12", "#GGGGGG", "70C1B3", "rgb(", "url(x)", "red;", "rgb((1)", "light blue", " #70C1B3 ", "#70C1B3\n"] {
            assert!(!is_color_expression(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn stylesheet_carries_every_token() {
        let theme = Theme::default();
        let css = stylesheet(&theme);
        for (name, value) in theme.colors.entries() {
            assert!(css.contains(&format!("--color-{name}: {value};")));
        }
        assert!(css.contains("--font-display: \"Plus Jakarta Sans\""));
        assert!(css.contains("--font-copy: \"Inter\""));
        assert!(css.contains("--shadow-focus: 0 10px 35px rgba(37, 122, 167, 0.25);"));
        assert!(!css.contains(['<', '>', '&']));
    }

    #[test]
    fn font_url_lists_both_families() {
        let url = Theme::default().font_stylesheet_url();
        assert!(url.starts_with("https://fonts.googleapis.com/css2?"));
        assert!(url.contains("family=Plus+Jakarta+Sans:wght@"));
        assert!(url.contains("family=Inter:wght@"));
        assert!(url.ends_with("&display=swap"));
    }

    #[test]
    fn theme_validation() {
        assert!(Theme::default().validate().is_ok());

        let mut theme = Theme::default();
        theme.colors.sand = "sandy yellow".to_string();
        assert!(matches!(
            theme.validate(),
            Err(BlueprintError::InvalidColor { .. })
        ));

        let mut theme = Theme::default();
        theme.fonts.copy = "  ".to_string();
        assert!(matches!(theme.validate(), Err(BlueprintError::Config(_))));

        for family in ["Inter#2", "Sans?x", "A+B", "Say \"hi\"", "Inter&display=block"] {
            let mut theme = Theme::default();
            theme.fonts.display = family.to_string();
            assert!(
                matches!(theme.validate(), Err(BlueprintError::Config(_))),
                "{family} should be rejected"
            );
        }

        let mut theme = Theme::default();
        theme.fonts.display = "Noto Sans Devanagari".to_string();
        theme.fonts.copy = "IBM Plex Sans-Condensed".to_string();
        theme.validate().unwrap();

        let mut theme = Theme::default();
        theme.colors.accent = " #70C1B3 ".to_string();
        assert!(matches!(
            theme.validate(),
            Err(BlueprintError::InvalidColor { .. })
        ));

        let mut theme = Theme::default();
        theme.shadows.focus = "0 0 1px red; color: red".to_string();
        assert!(matches!(theme.validate(), Err(BlueprintError::Config(_))));
    }
}
