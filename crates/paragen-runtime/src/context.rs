//! Process-scoped codec state: tokenizer/emitter options and the
//! unknown-field hook.
//!
//! Codecs never reach for globals on their own. A [`TokenSource`] carries the
//! context it was created from, and the byte/string conveniences use
//! [`CodecContext::global`] only when the caller does not pass one explicitly.

use crate::error::CodecResult;
use crate::sink::TokenSink;
use crate::token::TokenSource;
use std::fmt;
use std::io;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Receives `(wire_key, codec_name)` for every unrecognized key occurrence.
pub type UnknownFieldHook = dyn Fn(&str, &str) + Send + Sync;

static GLOBAL: OnceLock<CodecContext> = OnceLock::new();

/// Factory for token sources and sinks plus the replaceable unknown-field hook.
pub struct CodecContext {
    pretty: bool,
    hook: RwLock<Arc<UnknownFieldHook>>,
}

impl Default for CodecContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecContext {
    /// Compact output, no-op hook.
    pub fn new() -> Self {
        let hook: Arc<UnknownFieldHook> = Arc::new(|_: &str, _: &str| {});
        Self {
            pretty: false,
            hook: RwLock::new(hook),
        }
    }

    /// Indent serialized output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_unknown_field_hook<F>(self, hook: F) -> Self
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        self.set_unknown_field_hook(hook);
        self
    }

    /// The process-wide context, created with defaults on first use.
    pub fn global() -> &'static CodecContext {
        GLOBAL.get_or_init(CodecContext::new)
    }

    /// Install `context` as the process-wide context.
    ///
    /// Fails, handing the context back, if the global context was already
    /// initialized (explicitly or by first use).
    pub fn install(context: CodecContext) -> Result<&'static CodecContext, CodecContext> {
        GLOBAL.set(context)?;
        Ok(Self::global())
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Replace the unknown-field hook.
    pub fn set_unknown_field_hook<F>(&self, hook: F)
    where
        F: Fn(&str, &str) + Send + Sync + 'static,
    {
        let hook: Arc<UnknownFieldHook> = Arc::new(hook);
        *self.hook.write().unwrap_or_else(PoisonError::into_inner) = hook;
    }

    /// Restore the no-op hook.
    pub fn reset_unknown_field_hook(&self) {
        self.set_unknown_field_hook(|_, _| {});
    }

    pub fn report_unknown_field(&self, key: &str, codec: &str) {
        tracing::trace!(key, codec, "unknown field");
        // Clone out of the lock so the hook may itself replace the hook.
        let hook = Arc::clone(&self.hook.read().unwrap_or_else(PoisonError::into_inner));
        hook(key, codec);
    }

    pub fn source_from_str(&self, json: &str) -> CodecResult<TokenSource<'_>> {
        TokenSource::from_str(json, self)
    }

    pub fn source_from_slice(&self, bytes: &[u8]) -> CodecResult<TokenSource<'_>> {
        TokenSource::from_slice(bytes, self)
    }

    pub fn source_from_reader<R: io::Read>(&self, reader: R) -> CodecResult<TokenSource<'_>> {
        TokenSource::from_reader(reader, self)
    }

    /// A fresh sink honoring this context's output options.
    pub fn sink(&self) -> TokenSink {
        if self.pretty {
            TokenSink::pretty()
        } else {
            TokenSink::new()
        }
    }
}

impl fmt::Debug for CodecContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecContext")
            .field("pretty", &self.pretty)
            .finish_non_exhaustive()
    }
}
