use std::io::{self, IsTerminal, Write};

use onboard_shared::{ButtonMode, ButtonType, TodoType};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::effects::Effect;
use crate::view::{ActionNode, ButtonNode, TaskNode};

const WRAP_WIDTH: usize = 72;
const INDENT: &str = "    ";

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Colors only when `color` is on and stdout is a terminal.
    pub fn new(cfg: &Config) -> Self {
        let color = cfg.get_bool("color").unwrap_or(true) && io::stdout().is_terminal();
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip(self, cards))]
    pub fn print_cards(&self, cards: &[(usize, TaskNode)]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if cards.is_empty() {
            writeln!(out, "Nothing to do.")?;
            return Ok(());
        }
        for (idx, card) in cards {
            self.write_card(&mut out, *idx, card)?;
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn print_card(&self, idx: usize, card: &TaskNode) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        self.write_card(&mut out, idx, card)
    }

    /// One JSON object per effect, in issue order.
    pub fn print_effects(&self, effects: &[Effect]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        if effects.is_empty() {
            writeln!(out, "{}", self.paint("(no effects)", "2"))?;
        }
        for effect in effects {
            writeln!(out, "{}", serde_json::to_string(effect)?)?;
        }
        Ok(())
    }

    pub fn print_types(&self) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        for todo_type in TodoType::ALL {
            writeln!(out, "{todo_type}")?;
        }
        Ok(())
    }

    pub fn write_card<W: Write>(
        &self,
        mut writer: W,
        idx: usize,
        card: &TaskNode,
    ) -> anyhow::Result<()> {
        let marker = if card.badged {
            self.paint("*", "33")
        } else {
            " ".to_string()
        };
        let number = self.paint(&format!("[{idx}]"), "36");

        let mut lines = wrap(&card.instructions, WRAP_WIDTH).into_iter();
        writeln!(
            writer,
            "{number} {marker} {}",
            lines.next().unwrap_or_default()
        )?;
        for line in lines {
            writeln!(writer, "{INDENT}  {line}")?;
        }

        if !card.icon.is_empty() {
            writeln!(writer, "{INDENT}{}", self.paint(&card.icon, "2"))?;
        }
        for line in wrap(&card.sub_text, WRAP_WIDTH) {
            writeln!(writer, "{INDENT}{}", self.paint(&line, "2"))?;
        }

        if !card.actions.is_empty() {
            let row = card
                .actions
                .iter()
                .map(|action| match action {
                    | ActionNode::SearchBar => "[search people...]".to_string(),
                    | ActionNode::Button(button) => self.button(button),
                })
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(writer, "{INDENT}{row}")?;
        }

        Ok(())
    }

    fn button(&self, button: &ButtonNode) -> String {
        let text = match button.mode {
            | ButtonMode::Primary => format!("[{}]", button.label),
            | ButtonMode::Secondary => format!("({})", button.label),
        };
        match button.button_type {
            | ButtonType::Success => self.paint(&text, "32"),
            | ButtonType::Danger => self.paint(&text, "31"),
            | ButtonType::Dim => self.paint(&text, "2"),
            | ButtonType::Default => text,
        }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

/// Greedy word wrap by display width.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Handler;

    fn button(label: &str, button_type: ButtonType, mode: ButtonMode) -> ActionNode {
        ActionNode::Button(ButtonNode {
            key: label.to_string(),
            label: label.to_string(),
            button_type,
            mode,
            small: true,
            on_click: Handler::noop(),
        })
    }

    #[test]
    fn card_layout_in_plain_mode() {
        let card = TaskNode {
            icon: "icon-onboarding-chat-48".to_string(),
            badged: true,
            instructions: "Start a chat!".to_string(),
            sub_text: "Encrypted.".to_string(),
            actions: vec![
                ActionNode::SearchBar,
                button("Start a chat", ButtonType::Default, ButtonMode::Primary),
                button("Later", ButtonType::Default, ButtonMode::Secondary),
            ],
        };

        let mut out = Vec::new();
        Renderer::plain().write_card(&mut out, 3, &card).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "[3] * Start a chat!\n    icon-onboarding-chat-48\n    Encrypted.\n    \
             [search people...]  [Start a chat]  (Later)\n"
        );
    }

    #[test]
    fn color_off_in_config_disables_paint() {
        let mut cfg = Config::default();
        cfg.apply_overrides(vec![("rc.color".to_string(), "off".to_string())]);
        let renderer = Renderer::new(&cfg);
        assert_eq!(renderer.paint("x", "31"), "x");
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("aaa bbb ccc ddd", 7);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
        assert!(wrap("   ", 10).is_empty());
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }
}
