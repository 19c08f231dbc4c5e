//! 한 줄 입력 장치 포트 구현 어댑터.

use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;

use super::line_editor::{self, LineRequest};
use crate::application::ports::LineReader;

#[derive(Default)]
struct ReaderState {
    prefill: Option<String>,
    prompt_shown: bool,
    closed: bool,
}

/// 터미널 입력 어댑터. 블로킹 읽기는 별도 스레드에서 수행한다.
pub struct TerminalLineReader {
    prompt: String,
    color: bool,
    state: Mutex<ReaderState>,
}

impl TerminalLineReader {
    pub fn new(prompt: impl Into<String>, color: bool) -> Self {
        Self {
            prompt: prompt.into(),
            color,
            state: Mutex::new(ReaderState::default()),
        }
    }

    fn style(&self, ansi: &'static str) -> Option<&'static str> {
        self.color.then_some(ansi)
    }

    async fn read(&self, request: LineRequest) -> Result<Option<String>> {
        tokio::task::spawn_blocking(move || line_editor::read_line(&request))
            .await
            .context("input task failed")?
    }
}

#[async_trait]
impl LineReader for TerminalLineReader {
    fn prompt(&self) {
        let Ok(mut state) = self.state.lock() else {
            return;
        };
        if state.closed {
            return;
        }

        let prompt = match self.style("36") {
            Some(ansi) => format!("\x1b[{ansi}m{}\x1b[0m", self.prompt),
            None => self.prompt.clone(),
        };
        print!("{prompt}");
        let _ = io::stdout().flush();
        state.prompt_shown = true;
    }

    async fn read_command(&self) -> Result<Option<String>> {
        let prefix_printed = {
            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow::anyhow!("input state poisoned"))?;
            if state.closed {
                return Ok(None);
            }
            std::mem::take(&mut state.prompt_shown)
        };

        self.read(LineRequest {
            prefix: self.prompt.clone(),
            prefix_ansi: self.style("36"),
            initial: String::new(),
            prefix_printed,
            complete_commands: true,
            on_interrupt: Some("quit".to_string()),
        })
        .await
    }

    async fn question(&self, text: &str) -> Result<String> {
        let prefill = {
            let mut state = self
                .state
                .lock()
                .map_err(|_| anyhow::anyhow!("input state poisoned"))?;
            if state.closed {
                bail!("input is closed");
            }
            state.prefill.take()
        };

        let line = self
            .read(LineRequest {
                prefix: text.to_string(),
                prefix_ansi: self.style("31"),
                initial: prefill.unwrap_or_default(),
                prefix_printed: false,
                complete_commands: false,
                on_interrupt: None,
            })
            .await?;

        match line {
            Some(line) => Ok(line),
            None => bail!("input stream closed"),
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.prefill = Some(text.to_string());
        }
    }

    fn close(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.closed = true;
            state.prefill = None;
        }
    }
}
