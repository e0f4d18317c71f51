//! Model generator producing typed TypeScript declarations.
//!
//! This is the core of the tool: for each content type it resolves a
//! declaration name, resolves a property name per element through the
//! configured strategy, maps each element kind to its declared element
//! type, and assembles one formatted model file. Content types are
//! processed strictly in input order; element order within a type is
//! preserved in the generated declaration.

use crate::error::GeneratorError;
use crate::formatter::{FormatOptions, Formatter};
use crate::naming::{declaration_name, NameResolution, ResolverFn};
use crate::report::Reporter;
use crate::schema::ContentType;
use chrono::{SecondsFormat, Utc};
use std::collections::HashSet;
use std::fmt;

/// Extension of generated model files.
pub const MODEL_EXTENSION: &str = "ts";

/// Options controlling a generation run.
#[derive(Default)]
pub struct GeneratorOptions {
    /// Record a generation timestamp in the file header.
    pub add_timestamp: bool,

    /// Built-in resolver identifier (camelCase, PascalCase, snake_case).
    /// Validated when generation starts, not when options are built.
    pub name_resolver: Option<String>,

    /// Caller-supplied resolver. Takes precedence over `name_resolver`
    /// for every element; supplying both is not an error.
    pub custom_resolver: Option<Box<ResolverFn>>,

    /// Formatter options, forwarded opaquely.
    pub formatter: FormatOptions,
}

impl fmt::Debug for GeneratorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorOptions")
            .field("add_timestamp", &self.add_timestamp)
            .field("name_resolver", &self.name_resolver)
            .field("custom_resolver", &self.custom_resolver.is_some())
            .field("formatter", &self.formatter)
            .finish()
    }
}

/// One generated model file. Created fresh per content type and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Codename of the source content type.
    pub codename: String,

    /// Output filename (`<codename>.ts`).
    pub filename: String,

    /// Formatted file content.
    pub content: String,
}

/// Generates typed model declarations from content types.
pub struct ModelGenerator {
    options: GeneratorOptions,
    formatter: Formatter,
}

impl ModelGenerator {
    /// Create a generator with the given options.
    pub fn new(options: GeneratorOptions) -> Self {
        let formatter = Formatter::new(options.formatter.clone());
        Self { options, formatter }
    }

    /// Generate one model file per content type, in input order.
    ///
    /// An empty input produces an empty output. An unrecognized
    /// `name_resolver` identifier fails before any file is produced.
    /// Unknown element kinds are reported as warnings and emit a
    /// property line with an empty type.
    pub fn generate_models(
        &self,
        types: &[ContentType],
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        // Strategy precedence (custom over named) and identifier
        // validation are decided once per call.
        let resolution = self.resolution()?;

        let mut files = Vec::with_capacity(types.len());
        let mut seen_filenames = HashSet::new();

        for content_type in types {
            let file = self.generate_file(content_type, &resolution, reporter)?;

            if !seen_filenames.insert(file.filename.clone()) {
                reporter.warn(&format!(
                    "duplicate output filename '{}': the model for '{}' overwrites an earlier one",
                    file.filename, file.codename
                ));
            }

            reporter.progress(&format!("Generated {} from '{}'", file.filename, file.codename));
            files.push(file);
        }

        Ok(files)
    }

    /// Decide the name-resolution strategy for this invocation.
    fn resolution(&self) -> Result<NameResolution<'_>, GeneratorError> {
        if let Some(custom) = &self.options.custom_resolver {
            return Ok(NameResolution::Custom(custom.as_ref()));
        }

        match &self.options.name_resolver {
            None => Ok(NameResolution::Identity),
            Some(identifier) => Ok(NameResolution::Builtin(identifier.parse()?)),
        }
    }

    fn generate_file(
        &self,
        content_type: &ContentType,
        resolution: &NameResolution<'_>,
        reporter: &mut dyn Reporter,
    ) -> Result<GeneratedFile, GeneratorError> {
        let codename = content_type.codename();

        let mut properties = Vec::with_capacity(content_type.elements.len());
        for element in &content_type.elements {
            let property = resolution.resolve(codename, &element.codename);
            let mapped = match element_type_name(&element.element_type) {
                Some(name) => name,
                None => {
                    reporter.warn(&format!(
                        "unsupported element type '{}' on '{}.{}'",
                        element.element_type, codename, element.codename
                    ));
                    ""
                }
            };
            properties.push(format!("{property}: {mapped};"));
        }

        let declaration = self.assemble(codename, &properties);
        let content = self
            .formatter
            .format(&declaration)
            .map_err(|e| GeneratorError::format(codename, e))?;

        Ok(GeneratedFile {
            codename: codename.to_string(),
            filename: format!("{codename}.{MODEL_EXTENSION}"),
            content,
        })
    }

    fn assemble(&self, codename: &str, properties: &[String]) -> String {
        let mut out = String::new();

        out.push_str("// This file was automatically generated. Do not edit.\n");
        if self.options.add_timestamp {
            out.push_str(&format!(
                "// Generated at {}\n",
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
        out.push('\n');

        out.push_str(&format!("export type {} = {{\n", declaration_name(codename)));
        if !properties.is_empty() {
            out.push_str(&properties.join("\n"));
            out.push('\n');
        }
        out.push_str("};\n");

        out
    }
}

/// Map an element kind tag to its declared element type.
///
/// Comparison is case-insensitive. Unknown kinds return `None`; the
/// caller decides the soft-fail behavior.
pub fn element_type_name(kind: &str) -> Option<&'static str> {
    match kind.to_ascii_lowercase().as_str() {
        "text" => Some("TextElement"),
        "number" => Some("NumberElement"),
        "modular_content" | "linked_items" => Some("LinkedItemsElement<IContentItem>"),
        "asset" => Some("AssetsElement"),
        "date_time" => Some("DateTimeElement"),
        "rich_text" => Some("RichTextElement"),
        "multiple_choice" => Some("MultipleChoiceElement"),
        "url_slug" => Some("UrlSlugElement"),
        "taxonomy" => Some("TaxonomyElement"),
        "custom" => Some("CustomElement"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;
    use crate::schema::{ContentElement, TypeSystem};

    fn content_type(codename: &str, elements: Vec<ContentElement>) -> ContentType {
        ContentType {
            system: TypeSystem {
                codename: codename.to_string(),
                name: String::new(),
            },
            elements,
        }
    }

    fn generate(
        options: GeneratorOptions,
        types: &[ContentType],
    ) -> (Result<Vec<GeneratedFile>, GeneratorError>, MemoryReporter) {
        let generator = ModelGenerator::new(options);
        let mut reporter = MemoryReporter::default();
        let result = generator.generate_models(types, &mut reporter);
        (result, reporter)
    }

    #[test]
    fn test_empty_input_produces_no_files() {
        let (result, reporter) = generate(GeneratorOptions::default(), &[]);

        assert!(result.unwrap().is_empty());
        assert!(reporter.progress.is_empty());
        assert!(reporter.warnings.is_empty());
    }

    #[test]
    fn test_one_property_line_per_element_in_input_order() {
        let types = [content_type(
            "page",
            vec![
                ContentElement::new("zeta", "text"),
                ContentElement::new("alpha", "number"),
                ContentElement::new("mid", "asset"),
            ],
        )];

        let (result, _) = generate(GeneratorOptions::default(), &types);
        let files = result.unwrap();

        assert_eq!(files.len(), 1);
        let lines: Vec<_> = files[0]
            .content
            .lines()
            .filter(|l| l.trim_start().starts_with(|c: char| c.is_alphabetic()) && l.contains(';'))
            .collect();
        assert_eq!(
            lines,
            vec![
                "  zeta: TextElement;",
                "  alpha: NumberElement;",
                "  mid: AssetsElement;",
            ]
        );
    }

    #[test]
    fn test_identity_default_keeps_codenames() {
        let types = [content_type(
            "article",
            vec![
                ContentElement::new("Title", "text"),
                ContentElement::new("body_text", "rich_text"),
            ],
        )];

        let (result, _) = generate(GeneratorOptions::default(), &types);
        let content = &result.unwrap()[0].content;

        assert!(content.contains("  Title: TextElement;"));
        assert!(content.contains("  body_text: RichTextElement;"));
    }

    #[test]
    fn test_custom_resolver_overrides_named() {
        let types = [content_type(
            "article",
            vec![ContentElement::new("body_text", "rich_text")],
        )];

        let options = GeneratorOptions {
            name_resolver: Some("camelCase".to_string()),
            custom_resolver: Some(Box::new(|_type: &str, codename: &str| {
                format!("x_{codename}")
            })),
            ..Default::default()
        };

        let (result, _) = generate(options, &types);
        let content = &result.unwrap()[0].content;

        assert!(content.contains("  x_body_text: RichTextElement;"));
        assert!(!content.contains("bodyText"));
    }

    #[test]
    fn test_custom_resolver_receives_type_codename() {
        let types = [content_type("article", vec![ContentElement::new("title", "text")])];

        let options = GeneratorOptions {
            custom_resolver: Some(Box::new(|type_codename: &str, codename: &str| {
                format!("{type_codename}_{codename}")
            })),
            ..Default::default()
        };

        let (result, _) = generate(options, &types);

        assert!(result.unwrap()[0].content.contains("  article_title: TextElement;"));
    }

    #[test]
    fn test_invalid_name_resolver_fails_without_files() {
        let types = [content_type("article", vec![ContentElement::new("title", "text")])];

        let options = GeneratorOptions {
            name_resolver: Some("kebabCase".to_string()),
            ..Default::default()
        };

        let (result, reporter) = generate(options, &types);

        let err = result.unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidNameResolver { .. }));
        assert!(err.to_string().contains("camelCase"));
        assert!(reporter.progress.is_empty());
    }

    #[test]
    fn test_unknown_kind_warns_once_and_continues() {
        let types = [content_type(
            "widget",
            vec![
                ContentElement::new("title", "text"),
                ContentElement::new("mystery", "hologram"),
                ContentElement::new("count", "number"),
            ],
        )];

        let (result, reporter) = generate(GeneratorOptions::default(), &types);
        let files = result.unwrap();

        assert_eq!(reporter.warnings.len(), 1);
        assert!(reporter.warnings[0].contains("hologram"));
        assert!(reporter.warnings[0].contains("widget.mystery"));

        // The line is still emitted, with an empty type.
        assert!(files[0].content.contains("  mystery: ;"));
        assert!(files[0].content.contains("  count: NumberElement;"));
    }

    #[test]
    fn test_idempotent_without_timestamp() {
        let types = [content_type(
            "article",
            vec![
                ContentElement::new("title", "text"),
                ContentElement::new("related", "modular_content"),
            ],
        )];

        let (first, _) = generate(GeneratorOptions::default(), &types);
        let (second, _) = generate(GeneratorOptions::default(), &types);

        assert_eq!(first.unwrap()[0].content, second.unwrap()[0].content);
    }

    #[test]
    fn test_timestamp_header_only_when_requested() {
        let types = [content_type("article", vec![])];

        let (plain, _) = generate(GeneratorOptions::default(), &types);
        assert!(!plain.unwrap()[0].content.contains("Generated at"));

        let options = GeneratorOptions {
            add_timestamp: true,
            ..Default::default()
        };
        let (stamped, _) = generate(options, &types);
        assert!(stamped.unwrap()[0].content.contains("// Generated at "));
    }

    #[test]
    fn test_progress_line_per_type_in_order() {
        let types = [
            content_type("article", vec![]),
            content_type("author", vec![]),
        ];

        let (result, reporter) = generate(GeneratorOptions::default(), &types);
        result.unwrap();

        assert_eq!(reporter.progress.len(), 2);
        assert!(reporter.progress[0].contains("article.ts"));
        assert!(reporter.progress[0].contains("'article'"));
        assert!(reporter.progress[1].contains("author.ts"));
    }

    #[test]
    fn test_duplicate_filename_warns_last_wins() {
        let types = [
            content_type("article", vec![ContentElement::new("a", "text")]),
            content_type("article", vec![ContentElement::new("b", "number")]),
        ];

        let (result, reporter) = generate(GeneratorOptions::default(), &types);
        let files = result.unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(reporter.warnings.len(), 1);
        assert!(reporter.warnings[0].contains("article.ts"));
    }

    #[test]
    fn test_kind_mapping_is_case_insensitive() {
        assert_eq!(element_type_name("text"), Some("TextElement"));
        assert_eq!(element_type_name("Text"), Some("TextElement"));
        assert_eq!(element_type_name("RICH_TEXT"), Some("RichTextElement"));
        assert_eq!(element_type_name("DATE_time"), Some("DateTimeElement"));
        assert_eq!(element_type_name("marquee"), None);
    }

    #[test]
    fn test_linked_items_is_generic_over_content_item() {
        assert_eq!(
            element_type_name("modular_content"),
            Some("LinkedItemsElement<IContentItem>")
        );
        assert_eq!(
            element_type_name("linked_items"),
            Some("LinkedItemsElement<IContentItem>")
        );
    }

    #[test]
    fn test_article_end_to_end() {
        let types = [content_type(
            "article",
            vec![
                ContentElement::new("Title", "text"),
                ContentElement::new("body_text", "rich_text"),
            ],
        )];

        let options = GeneratorOptions {
            name_resolver: Some("camelCase".to_string()),
            ..Default::default()
        };

        let (result, _) = generate(options, &types);
        let files = result.unwrap();

        assert_eq!(files[0].filename, "article.ts");
        assert!(files[0].content.contains("export type Article = {"));

        let title = files[0].content.find("title: TextElement;").unwrap();
        let body = files[0].content.find("bodyText: RichTextElement;").unwrap();
        assert!(title < body);
    }

    #[test]
    fn test_empty_type_has_empty_body() {
        let types = [content_type("empty", vec![])];

        let (result, _) = generate(GeneratorOptions::default(), &types);
        let content = &result.unwrap()[0].content;

        assert!(content.contains("export type Empty = {\n};"));
    }
}
