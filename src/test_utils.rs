//! テスト用ユーティリティ
//!
//! 複数のテストモジュールで使用される共通のスタブを提供します。
#![cfg(test)]

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::sync::Arc;

use crate::block::Block;
use crate::catalog::{
    format_message,
    parse_message,
};
use crate::context::RequestScope;
use crate::locale::Locale;
use crate::render::{
    BlockRenderer,
    RenderError,
};
use crate::translation::{
    BundleId,
    LocalizationManager,
    Translation,
};

/// 固定ロケール `en`、バンドル `test.json` の翻訳
///
/// ロケール付きで描画すると `[<locale>] ` が先頭に付く。
#[derive(Debug, Clone)]
pub(crate) struct StubTranslation {
    key: Option<String>,
    source: String,
    locale: Locale,
    bundle: BundleId,
}

impl StubTranslation {
    pub(crate) fn new(key: Option<&str>, source: &str) -> Self {
        Self {
            key: key.map(str::to_string),
            source: source.to_string(),
            locale: Locale::new("en"),
            bundle: BundleId::new("test.json"),
        }
    }
}

impl Translation for StubTranslation {
    fn bundle(&self) -> &BundleId {
        &self.bundle
    }

    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn raw_source(&self) -> &str {
        &self.source
    }

    fn render_with_locale(&self, locale: Option<&Locale>, parameters: &[&str]) -> Block {
        let text = format_message(&self.source, parameters);
        match locale {
            Some(locale) => parse_message(&format!("[{locale}] {text}")),
            None => parse_message(&text),
        }
    }
}

/// キーごとに [`StubTranslation`] を返すだけの manager
#[derive(Debug, Default)]
pub(crate) struct StubLocalization {
    translations: HashMap<String, Arc<StubTranslation>>,
}

impl StubLocalization {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// キーのない翻訳は登録されない
    pub(crate) fn with(mut self, translation: StubTranslation) -> Self {
        if let Some(key) = translation.key().map(str::to_string) {
            self.translations.insert(key, Arc::new(translation));
        }
        self
    }
}

impl LocalizationManager for StubLocalization {
    fn translation(
        &self,
        key: &str,
        _locale: &Locale,
        _scope: Option<&RequestScope>,
    ) -> Option<Arc<dyn Translation>> {
        self.translations.get(key).map(|t| Arc::clone(t) as Arc<dyn Translation>)
    }
}

/// 常に失敗する renderer（根本原因は `io::Error`）
pub(crate) struct FailingRenderer {
    message: String,
}

impl FailingRenderer {
    pub(crate) fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

impl BlockRenderer for FailingRenderer {
    fn render(&self, _block: &Block, _sink: &mut dyn fmt::Write) -> Result<(), RenderError> {
        Err(RenderError::with_source("render failed", io::Error::other(self.message.clone())))
    }
}
