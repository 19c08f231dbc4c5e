//! 콘솔 리포터 포트 구현 어댑터.

use std::io::{self, IsTerminal};

use unicode_width::UnicodeWidthStr;

use crate::application::ports::{Reporter, Tone};

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    /// 설정이 허용하고 stdout이 TTY일 때만 색을 쓴다.
    pub fn new(color_enabled: bool) -> Self {
        Self {
            color: color_enabled && io::stdout().is_terminal(),
        }
    }

    fn paint(&self, text: &str, ansi: &str) -> String {
        if self.color {
            format!("\x1b[{ansi}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Reporter for ConsoleReporter {
    fn log(&self, line: &str) {
        println!("{line}");
    }

    fn color_log(&self, line: &str, tone: Tone) {
        println!("{}", self.paint(line, tone_code(tone)));
    }

    fn big_log(&self, text: &str, tone: Tone) {
        let bold = format!("1;{}", tone_code(tone));
        for line in render_banner(text) {
            println!("{}", self.paint(&line, &bold));
        }
    }

    fn error_log(&self, message: &str) {
        eprintln!("{} {}", self.paint("error:", "1;31"), self.paint(message, "31"));
    }

    fn colorize(&self, text: &str, tone: Tone) -> String {
        self.paint(text, tone_code(tone))
    }
}

fn tone_code(tone: Tone) -> &'static str {
    match tone {
        Tone::Red => "31",
        Tone::Green => "32",
        Tone::Yellow => "33",
        Tone::Blue => "34",
        Tone::Magenta => "35",
    }
}

/// 대문자 자간 배너를 상자로 감싼다.
fn render_banner(text: &str) -> Vec<String> {
    let spaced = text
        .trim()
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    let inner = UnicodeWidthStr::width(spaced.as_str()) + 4;

    vec![
        format!("╔{}╗", "═".repeat(inner)),
        format!("║  {spaced}  ║"),
        format!("╚{}╝", "═".repeat(inner)),
    ]
}
