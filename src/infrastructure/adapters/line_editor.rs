//! 한 줄 입력 편집기.
//! TTY에서는 raw mode로 커서 이동/미리 채우기/명령 탭 완성을 지원하고,
//! 그 외에는 일반 라인 입력으로 동작한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::queue;
use crossterm::style::ResetColor;
use crossterm::terminal::{self, ClearType};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::usecases::about::COMMAND_HELP;

/// 입력 한 줄을 읽기 위한 요청.
#[derive(Debug, Clone, Default)]
pub struct LineRequest {
    /// 입력 앞에 표시할 문구(색 없는 원문).
    pub prefix: String,
    /// 문구에 적용할 ANSI 스타일 코드.
    pub prefix_ansi: Option<&'static str>,
    /// 편집 가능한 초기 입력값.
    pub initial: String,
    /// 대체 입력 모드에서 문구가 이미 출력되었는지 여부.
    pub prefix_printed: bool,
    /// REPL 명령어 탭 완성 사용 여부.
    pub complete_commands: bool,
    /// Ctrl+C 입력 시 돌려줄 값. 없으면 입력 종료로 본다.
    pub on_interrupt: Option<String>,
}

impl LineRequest {
    fn painted_prefix(&self) -> String {
        match self.prefix_ansi {
            Some(ansi) => format!("\x1b[{ansi}m{}\x1b[0m", self.prefix),
            None => self.prefix.clone(),
        }
    }
}

/// 한 줄을 읽는다. 입력 스트림이 끝나면 `None`.
pub fn read_line(request: &LineRequest) -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback(request);
    }

    match read_line_interactive(request) {
        Ok(v) => Ok(v),
        Err(_) => read_line_fallback(request),
    }
}

/// raw mode 편집기를 쓸 수 있는 터미널인지 판단한다.
pub fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 편집을 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(request: &LineRequest) -> Result<Option<String>> {
    // 미리 채우기는 TTY 편집기에서만 의미가 있으므로 여기서는 무시한다.
    if !request.prefix_printed {
        print!("{}", request.painted_prefix());
    }
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(trim_newline(line)))
}

fn read_line_interactive(request: &LineRequest) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let painted = request.painted_prefix();
    let prefix_width = display_width(&request.prefix);
    let mut input = request.initial.clone();
    let mut cursor_chars = input.chars().count();

    loop {
        render_line(&mut stdout, &painted, prefix_width, &input, cursor_chars)?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        finish_line(&mut stdout)?;
                        return Ok(Some(input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Tab => {
                        if request.complete_commands
                            && let Some(completed) = complete_command(&input)
                        {
                            input = completed;
                            cursor_chars = input.chars().count();
                        }
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        if input.is_empty() {
                            finish_line(&mut stdout)?;
                            return Ok(None);
                        }
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout)?;
                        return Ok(request.on_interrupt.clone());
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

/// 명령어 접두사가 한 명령에만 맞으면 그 명령으로 완성한다.
/// `<id>` 인자를 받는 명령은 뒤에 공백을 붙인다.
fn complete_command(input: &str) -> Option<String> {
    if input.is_empty() || input.contains(' ') {
        return None;
    }

    let matches: Vec<(&str, bool)> = COMMAND_HELP
        .iter()
        .filter_map(|(usage, _)| {
            let verb = usage.split_whitespace().next()?.rsplit('|').next()?;
            Some((verb, usage.contains('<')))
        })
        .filter(|(verb, _)| verb.starts_with(input))
        .collect();

    match matches.as_slice() {
        [(verb, takes_id)] if *takes_id => Some(format!("{verb} ")),
        [(verb, _)] if *verb != input => Some((*verb).to_string()),
        _ => None,
    }
}

fn render_line(
    stdout: &mut io::Stdout,
    painted_prefix: &str,
    prefix_width: usize,
    input: &str,
    cursor_chars: usize,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    let width = (w as usize).max(20);
    let available = width.saturating_sub(prefix_width + 1);
    let shown = tail_with_ellipsis_display(input, available);

    queue!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(stdout, "{painted_prefix}{shown}")?;

    let col = prefix_width + cursor_col(input, cursor_chars, available);
    queue!(stdout, cursor::MoveToColumn(col.min(width - 1) as u16))?;
    stdout.flush()?;
    Ok(())
}

fn finish_line(stdout: &mut io::Stdout) -> Result<()> {
    // raw mode에서는 줄바꿈이 자동으로 캐리지 리턴을 포함하지 않는다.
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn cursor_col(input: &str, cursor_chars: usize, available: usize) -> usize {
    let input_width = display_width(input);
    if input_width <= available {
        let before_cursor: String = input.chars().take(cursor_chars).collect();
        return display_width(&before_cursor);
    }

    // 오버플로우 상태에서는 tail 표시 정책상 커서를 입력 끝쪽으로 정렬한다.
    display_width(&tail_with_ellipsis_display(input, available))
}

fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if display_width(text) <= max_width {
        return text.to_string();
    }

    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let target = max_width - 3;
    let mut tail_rev = String::new();
    let mut used = 0usize;

    for ch in text.chars().rev() {
        let cw = char_display_width(ch);
        if used + cw > target {
            break;
        }
        tail_rev.push(ch);
        used += cw;
    }

    let tail: String = tail_rev.chars().rev().collect();
    format!("...{tail}")
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_unique_command_prefix() {
        assert_eq!(complete_command("li"), Some("list".to_string()));
        assert_eq!(complete_command("sh"), Some("show ".to_string()));
        assert_eq!(complete_command("cr"), Some("credits".to_string()));
        // `p`는 play 하나에만 맞는다.
        assert_eq!(complete_command("pl"), Some("play".to_string()));
    }

    #[test]
    fn ambiguous_or_complete_input_is_left_alone() {
        assert_eq!(complete_command(""), None);
        assert_eq!(complete_command("list"), None);
        assert_eq!(complete_command("show 3"), None);
        assert_eq!(complete_command("zzz"), None);
    }

    #[test]
    fn edits_multibyte_text_by_char_index() {
        let mut input = "Capital de España".to_string();
        remove_char_at(&mut input, 15);
        assert_eq!(input, "Capital de Espaa");
        insert_char_at(&mut input, 15, 'ñ');
        assert_eq!(input, "Capital de España");
    }

    #[test]
    fn long_input_keeps_its_tail_visible() {
        assert_eq!(tail_with_ellipsis_display("abcdefghij", 7), "...ghij");
        assert_eq!(tail_with_ellipsis_display("abc", 7), "abc");
        assert_eq!(tail_with_ellipsis_display("abcdef", 2), "..");
    }

    #[test]
    fn cursor_column_follows_display_width() {
        assert_eq!(cursor_col("한국어", 2, 40), 4);
        assert_eq!(cursor_col("abc", 1, 40), 1);
    }

    #[test]
    fn strips_trailing_line_endings() {
        assert_eq!(trim_newline("Rome\r\n".to_string()), "Rome");
        assert_eq!(trim_newline("Rome".to_string()), "Rome");
    }
}
