//! 유스케이스/REPL 테스트용 가짜 포트 구현.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::application::ports::{LineReader, Reporter, Tone};

/// 입력 장치와 출력 장치가 공유하는 사건 기록.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Prompt,
    Question(String),
    Prefill(String),
    Close,
    Log(String),
    Big(String),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct Transcript(Arc<Mutex<Vec<Event>>>);

impl Transcript {
    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

/// 미리 정한 명령/응답을 순서대로 돌려주는 입력 장치.
pub struct ScriptedLineReader {
    transcript: Transcript,
    commands: Mutex<VecDeque<String>>,
    answers: Mutex<VecDeque<String>>,
    fail_after_commands: bool,
}

impl ScriptedLineReader {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_transcript(Transcript::default(), answers)
    }

    pub fn with_transcript<I, S>(transcript: Transcript, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            transcript,
            commands: Mutex::new(VecDeque::new()),
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            fail_after_commands: false,
        }
    }

    pub fn with_commands<I, S>(self, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.commands.lock().unwrap() = commands.into_iter().map(Into::into).collect();
        self
    }

    /// 명령이 바닥나면 입력 끝 대신 읽기 오류를 낸다.
    pub fn failing_after_commands(mut self) -> Self {
        self.fail_after_commands = true;
        self
    }

    pub fn questions(&self) -> Vec<String> {
        self.transcript
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Question(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn prefills(&self) -> Vec<String> {
        self.transcript
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Prefill(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn unused_answers(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

#[async_trait]
impl LineReader for ScriptedLineReader {
    fn prompt(&self) {
        self.transcript.push(Event::Prompt);
    }

    async fn read_command(&self) -> Result<Option<String>> {
        let next = self.commands.lock().unwrap().pop_front();
        if next.is_none() && self.fail_after_commands {
            bail!("terminal went away");
        }
        Ok(next)
    }

    async fn question(&self, text: &str) -> Result<String> {
        self.transcript.push(Event::Question(text.to_string()));
        let next = self.answers.lock().unwrap().pop_front();
        match next {
            Some(answer) => Ok(answer),
            None => bail!("input stream closed"),
        }
    }

    fn write(&self, text: &str) {
        self.transcript.push(Event::Prefill(text.to_string()));
    }

    fn close(&self) {
        self.transcript.push(Event::Close);
    }
}

/// 출력을 색 없이 기록하는 리포터.
#[derive(Default)]
pub struct RecordingReporter {
    transcript: Transcript,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transcript(transcript: Transcript) -> Self {
        Self { transcript }
    }

    /// 일반/색상/큰 글씨 출력 줄.
    pub fn lines(&self) -> Vec<String> {
        self.transcript
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Log(line) | Event::Big(line) => Some(line),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn log(&self, line: &str) {
        self.transcript.push(Event::Log(line.to_string()));
    }

    fn color_log(&self, line: &str, _tone: Tone) {
        self.transcript.push(Event::Log(line.to_string()));
    }

    fn big_log(&self, text: &str, _tone: Tone) {
        self.transcript.push(Event::Big(text.to_string()));
    }

    fn error_log(&self, message: &str) {
        self.transcript.push(Event::Error(message.to_string()));
    }

    fn colorize(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}
