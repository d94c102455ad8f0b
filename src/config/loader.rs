//! 設定ファイル `.translation-inspector.json` の読み込み

use std::io;
use std::path::Path;

use super::{
    ConfigError,
    InspectorSettings,
};

/// 設定ファイル名（カタログのルート直下に置く）
pub const CONFIG_FILE_NAME: &str = ".translation-inspector.json";

impl InspectorSettings {
    /// `root` の設定ファイルを読み込み、検証済みの設定を返す
    ///
    /// ファイルが無ければデフォルト設定。書かれていない項目もデフォルト値で埋まる。
    ///
    /// # Errors
    /// - ファイル読み込みエラー（存在しない場合を除く）
    /// - JSON パースエラー
    /// - バリデーションエラー（全件まとめて返す）
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_FILE_NAME);

        let settings = match std::fs::read_to_string(&config_path) {
            Ok(content) => {
                tracing::debug!(path = %config_path.display(), "Loading settings");
                serde_json::from_str(&content)?
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %config_path.display(), "No settings file, using defaults");
                Self::default()
            }
            Err(err) => return Err(err.into()),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(settings)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::FlagNames;

    fn root_with_config(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();
        temp_dir
    }

    /// 設定ファイルが無い: デフォルト
    #[rstest]
    fn load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();

        let settings = InspectorSettings::load(temp_dir.path()).unwrap();

        assert_that!(settings.flags, eq(&FlagNames::default()));
        assert_that!(settings.catalog.default_locale, none());
    }

    /// 一部だけ書かれた設定: 残りはデフォルト
    #[rstest]
    fn load_merges_partial_file_with_defaults() {
        let temp_dir = root_with_config(
            r#"{"flags": {"showHints": "hints"}, "catalog": {"defaultLocale": "fr"}}"#,
        );

        let settings = InspectorSettings::load(temp_dir.path()).unwrap();

        assert_that!(settings.flags.show_hints.as_str(), eq("hints"));
        assert_that!(settings.flags.save_keys.as_str(), eq("saveKeys"));
        assert_that!(settings.catalog.default_locale.as_deref(), some(eq("fr")));
        assert_that!(settings.catalog.key_separator.as_str(), eq("."));
    }

    #[rstest]
    fn load_rejects_invalid_json() {
        let temp_dir = root_with_config("{ flags: ");

        let result = InspectorSettings::load(temp_dir.path());

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// 読み込めても検証に通らなければエラー
    #[rstest]
    fn load_rejects_settings_that_fail_validation() {
        let temp_dir = root_with_config(
            r#"{"flags": {"saveKeys": "showKeys"}, "catalog": {"keySeparator": ""}}"#,
        );

        let Err(ConfigError::ValidationErrors(errors)) = InspectorSettings::load(temp_dir.path())
        else {
            panic!("expected validation errors");
        };

        assert_that!(errors, len(eq(2)));
    }

    /// ルートがディレクトリでない場合は I/O エラー
    #[rstest]
    fn load_reports_unreadable_root() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, "").unwrap();

        let result = InspectorSettings::load(&file);

        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
