//! # CMakeLists Rendering Engine
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! Turns a [`ConfigurationRecord`] into the literal text of a `CMakeLists.txt`.
//! The output is the one byte-exact contract of cmake-creator: the preview,
//! the export archive and any other consumer receive identical bytes for
//! identical input.
//!
//! ## Architecture
//!
//! Rendering uses the Tera templating engine with autoescaping disabled:
//! 1. The record is flattened into a serializable [`RenderContext`]. The target
//!    kind is turned into its generator command here (see [`KeywordStyle`]).
//! 2. [`CMAKE_TEMPLATE`] is expanded against that context.
//! 3. If expansion fails, the error is logged and a minimal fallback document is
//!    returned instead. [`render`] never fails.
//!
//! Output shape:
//!
//! ```text
//! cmake_minimum_required(VERSION 3.29)
//! project(Demo LANGUAGES C CXX )
//!
//! add_executable(app
//!     main.cpp
//! )
//! target_link_libraries(app PUBLIC
//!     pthread
//! )
//!
//! add_compile_options(-Wall)
//! ```
//!
//! `target_include_directories`, `target_link_libraries` and
//! `target_compile_definitions` appear only when their list is non-empty; the
//! `add_<kind>` block is always written.
//!
use crate::core::error::{CreatorError, Result};
use crate::project::schema::{ConfigurationRecord, TargetKind, TargetRecord};
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use tera::Tera;
use tracing::{debug, error};

/// The CMakeLists.txt template.
///
/// Block tags sit at the start of the line they produce so that no stray
/// whitespace leaks into the output.
///
/// Values are substituted verbatim: unlike the browser editor's output, `<`, `>`,
/// `&` and quotes are not HTML-escaped.
pub const CMAKE_TEMPLATE: &str = r#"cmake_minimum_required(VERSION {{ tool_version }})
project({{ project_name }} LANGUAGES {% for language in languages %}{{ language }}{% if trailing_language_space or not loop.last %} {% endif %}{% endfor %})

{% for target in targets %}{{ target.command }}({{ target.name }}{{ target.qualifier }}
{% for source in target.sources %}    {{ source }}
{% endfor %})
{% if target.include_dirs %}target_include_directories({{ target.name }} PUBLIC
{% for dir in target.include_dirs %}    {{ dir }}
{% endfor %})
{% endif %}{% if target.link_libs %}target_link_libraries({{ target.name }} PUBLIC
{% for lib in target.link_libs %}    {{ lib }}
{% endfor %})
{% endif %}{% if target.compile_defs %}target_compile_definitions({{ target.name }} PUBLIC
{% for def in target.compile_defs %}    {{ def }}
{% endfor %})
{% endif %}{% endfor %}
{% for option in options %}add_compile_options({{ option }})
{% endfor %}"#;

/// How a target kind becomes a generator command.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeywordStyle {
    /// `add_<kind>(<name>`: the kind tag is substituted verbatim. Matches files
    /// produced by earlier versions of the tool.
    #[default]
    Literal,
    /// `add_executable(<name>` / `add_library(<name> STATIC|SHARED|INTERFACE`.
    Conventional,
}

/// Knobs that change the rendered text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    #[serde(default)]
    pub keyword_style: KeywordStyle,
    /// Keep the space after the last language (`LANGUAGES CXX )`).
    #[serde(default = "default_trailing_language_space")]
    pub trailing_language_space: bool,
}

fn default_trailing_language_space() -> bool {
    true
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            keyword_style: KeywordStyle::default(),
            trailing_language_space: default_trailing_language_space(),
        }
    }
}

/// Generator command and the argument that follows the target name.
fn target_command(kind: TargetKind, style: KeywordStyle) -> (String, &'static str) {
    match (style, kind) {
        (KeywordStyle::Literal, kind) => (format!("add_{}", kind.as_str()), ""),
        (KeywordStyle::Conventional, TargetKind::Executable) => ("add_executable".to_string(), ""),
        (KeywordStyle::Conventional, TargetKind::Static) => ("add_library".to_string(), " STATIC"),
        (KeywordStyle::Conventional, TargetKind::Shared) => ("add_library".to_string(), " SHARED"),
        (KeywordStyle::Conventional, TargetKind::Interface) => {
            ("add_library".to_string(), " INTERFACE")
        }
    }
}

/// Values the template sees for one target.
#[derive(Serialize, Debug)]
struct TargetContext<'a> {
    command: String,
    qualifier: &'static str,
    name: &'a str,
    sources: &'a [String],
    include_dirs: &'a [String],
    link_libs: &'a [String],
    compile_defs: &'a [String],
}

/// Values the template sees for a whole document.
#[derive(Serialize, Debug)]
pub struct RenderContext<'a> {
    tool_version: &'a str,
    project_name: &'a str,
    languages: Vec<&'static str>,
    trailing_language_space: bool,
    targets: Vec<TargetContext<'a>>,
    options: &'a [String],
}

impl<'a> RenderContext<'a> {
    pub fn new(record: &'a ConfigurationRecord, options: &RenderOptions) -> Self {
        let target_context = |target: &'a TargetRecord| {
            let (command, qualifier) = target_command(target.kind, options.keyword_style);
            TargetContext {
                command,
                qualifier,
                name: &target.name,
                sources: &target.sources,
                include_dirs: &target.include_dirs,
                link_libs: &target.link_libs,
                compile_defs: &target.compile_defs,
            }
        };
        Self {
            tool_version: &record.tool_version,
            project_name: &record.project_name,
            languages: record.languages.iter().map(|l| l.as_str()).collect(),
            trailing_language_space: options.trailing_language_space,
            targets: record.targets.iter().map(target_context).collect(),
            options: &record.options,
        }
    }
}

/// Renders `record` with the default (compatible) options.
pub fn render(record: &ConfigurationRecord) -> String {
    render_with_options(record, &RenderOptions::default())
}

/// Renders `record`, falling back to a minimal document if expansion fails.
pub fn render_with_options(record: &ConfigurationRecord, options: &RenderOptions) -> String {
    render_or_fallback(CMAKE_TEMPLATE, record, options)
}

/// Renders `record`, propagating expansion failures.
pub fn try_render(record: &ConfigurationRecord, options: &RenderOptions) -> Result<String> {
    expand(CMAKE_TEMPLATE, record, options)
}

fn render_or_fallback(
    template: &str,
    record: &ConfigurationRecord,
    options: &RenderOptions,
) -> String {
    match expand(template, record, options) {
        Ok(text) => text,
        Err(e) => {
            error!("Template rendering error: {:#}", e);
            fallback_document(record, &format!("{:#}", e))
        }
    }
}

fn expand(template: &str, record: &ConfigurationRecord, options: &RenderOptions) -> Result<String> {
    debug!(
        "Rendering CMakeLists for project '{}' ({} targets, {} options)",
        record.project_name,
        record.targets.len(),
        record.options.len()
    );
    let context = RenderContext::new(record, options);
    let tera_context = tera::Context::from_serialize(&context).map_err(|e| {
        anyhow!(CreatorError::Template { source: e }).context("Failed to build render context")
    })?;
    Tera::one_off(template, &tera_context, false)
        .map_err(|e| anyhow!(CreatorError::Template { source: e }))
        .with_context(|| format!("Rendering failed for project '{}'", record.project_name))
}

/// Minimal document returned when the template cannot be expanded.
pub fn fallback_document(record: &ConfigurationRecord, message: &str) -> String {
    let mut doc = String::from("# Template rendering error\n");
    for line in message.lines() {
        doc.push_str("# ");
        doc.push_str(line);
        doc.push('\n');
    }
    doc.push('\n');
    doc.push_str(&format!(
        "cmake_minimum_required(VERSION {})\n",
        record.tool_version
    ));
    doc.push_str(&format!("project({})\n", record.project_name));
    doc
}
