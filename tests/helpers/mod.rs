#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use quizdoc::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use quizdoc::domain::Document;

pub const BOUNDARY: &str = "quizdoc-test-boundary";
pub const SAMPLE_PDF: &[u8] = include_bytes!("../fixtures/sample.pdf");

#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Timeout,
    RateLimited,
    Invalid,
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Self::Text(text.to_string())
    }

    fn into_result(self) -> Result<String, LlmClientError> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Timeout => Err(LlmClientError::Timeout("operation timed out".to_string())),
            Self::RateLimited => Err(LlmClientError::RateLimited),
            Self::Invalid => Err(LlmClientError::InvalidResponse("garbage".to_string())),
        }
    }
}

/// Scripted model: replays queued replies, then repeats the fallback.
pub struct MockLlmClient {
    queued: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    contexts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn replying(text: &str) -> Self {
        Self::scripted(Vec::new(), Reply::text(text))
    }

    pub fn failing_with(reply: Reply) -> Self {
        Self::scripted(Vec::new(), reply)
    }

    pub fn scripted(queued: Vec<Reply>, fallback: Reply) -> Self {
        Self {
            queued: Mutex::new(queued.into()),
            fallback,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
            contexts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn contexts(&self) -> Vec<String> {
        self.contexts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.contexts.lock().unwrap().push(context.to_string());

        let reply = self
            .queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        reply.into_result()
    }
}

/// Stands in for PDF parsing: returns fixed text, or no text at all.
pub struct MockFileLoader {
    text: Option<String>,
    calls: AtomicUsize,
}

impl MockFileLoader {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn without_text() -> Self {
        Self {
            text: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(
        &self,
        _data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text
            .clone()
            .ok_or_else(|| FileLoaderError::NoTextFound(document.filename.clone()))
    }
}

pub fn pdf_document(data: &[u8]) -> Document {
    Document::from_upload("sample.pdf".to_string(), data)
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

pub fn multipart_body(file: Option<(&str, &[u8])>, fields: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();

    if let Some((filename, data)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                 Content-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    for (name, value) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
