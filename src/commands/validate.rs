//! XML schema validation.
//!
//! Validates an XML document against an XSD schema through libxml2. Schema
//! violations are printed one per line; `--verbose` adds source positions.

use crate::logger::Logger;
use libxml::parser::Parser;
use libxml::schemas::{SchemaParserContext, SchemaValidationContext};
use std::error::Error;
use std::path::Path;

fn path_str(path: &Path) -> Result<&str, Box<dyn Error>> {
    path.to_str()
        .ok_or_else(|| format!("Non-UTF-8 path: {}", path.display()).into())
}

/// Validate `xml` against `xsd`.
///
/// Returns `Ok(true)` when the document conforms, `Ok(false)` when the
/// schema rejects it, `Err` when either input cannot be parsed.
pub fn validate(xml: &Path, xsd: &Path, verbose: bool) -> Result<bool, Box<dyn Error>> {
    Logger::file_operation("Validating", xml);
    Logger::detail(&format!("Schema: {}", xsd.display()));

    let mut schema_parser = SchemaParserContext::from_file(path_str(xsd)?);
    let mut schema = SchemaValidationContext::from_parser(&mut schema_parser).map_err(|errors| {
        let details: Vec<String> = errors
            .iter()
            .map(|e| e.message.as_deref().unwrap_or("unknown error").trim().to_string())
            .collect();
        format!(
            "Failed to parse schema {}: {}",
            xsd.display(),
            details.join("; ")
        )
    })?;

    let document = Parser::default()
        .parse_file(path_str(xml)?)
        .map_err(|e| format!("Failed to parse {}: {}", xml.display(), e))?;

    match schema.validate_document(&document) {
        Ok(()) => {
            Logger::success("Document is valid");
            Ok(true)
        }
        Err(errors) => {
            Logger::error(&format!(
                "Document is invalid ({} schema errors)",
                errors.len()
            ));
            for err in &errors {
                let message = err.message.as_deref().unwrap_or("unknown error").trim();
                if verbose {
                    let line = err.line.unwrap_or(0);
                    let col = err.col.unwrap_or(0);
                    Logger::detail(&format!("{} (line {}, column {})", message, line, col));
                } else {
                    Logger::detail(message);
                }
            }
            Ok(false)
        }
    }
}
