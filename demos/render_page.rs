//! Renders a handful of translation keys the way a page request would.
//!
//! ```text
//! cargo run --example render_page -- <catalog-dir> <locale> <query> <key>...
//! RUST_LOG=translation_inspector=debug \
//!     cargo run --example render_page -- ./i18n fr saveKeys menu.home
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use translation_inspector::config::InspectorSettings;
use translation_inspector::context::{
    ExecutionContext,
    Request,
    RequestScope,
};
use translation_inspector::locale::Locale;
use translation_inspector::render::{
    PlainTextRenderer,
    render_to_string,
};
use translation_inspector::{
    CatalogLocalization,
    InspectingLocalizationManager,
    LocalizationManager,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(root), Some(locale), Some(query)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: render_page <catalog-dir> <locale> <query> <key>...");
        return ExitCode::FAILURE;
    };
    let keys: Vec<String> = args.collect();

    match run(Path::new(&root), &Locale::new(&locale), &query, &keys) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    root: &Path,
    locale: &Locale,
    query: &str,
    keys: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = InspectorSettings::load(root)?;

    let localization = CatalogLocalization::from_settings(root, &settings.catalog)?;
    let renderer = Arc::new(PlainTextRenderer::new());
    let manager = InspectingLocalizationManager::with_settings(localization, renderer, &settings);

    let context = ExecutionContext::new();
    let scope =
        RequestScope::new(Request::from_query(query)).with_execution_context(context.clone());

    for key in keys {
        match manager.translation(key, locale, Some(&scope)) {
            Some(translation) => {
                let text = render_to_string(&PlainTextRenderer, &translation.render(&[]))?;
                println!("{key}: {text}");
            }
            None => println!("{key}: <missing>"),
        }
    }

    let exported = context.export();
    if exported.as_object().is_some_and(|data| !data.is_empty()) {
        println!("{}", serde_json::to_string_pretty(&exported)?);
    }
    Ok(())
}
