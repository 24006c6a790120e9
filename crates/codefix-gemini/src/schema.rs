//! Response schema for analysis requests
//!
//! Uses the OpenAPI subset accepted by `generationConfig.responseSchema`
//! (upper-case type names).

use serde_json::{json, Value};

use codefix_core::{AnalysisResult, CodeError};

/// Top-level fields every analysis reply must carry
pub const REQUIRED_FIELDS: &[&str] = &AnalysisResult::REQUIRED_FIELDS;

/// Fields every error item must carry
pub const REQUIRED_ERROR_FIELDS: &[&str] = &CodeError::REQUIRED_FIELDS;

/// Schema object sent with every analysis request
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "language": {
                "type": "STRING",
                "description": "The detected programming language (Java, Python, C++, etc.)"
            },
            "errors": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "type": {
                            "type": "STRING",
                            "description": "Short error type (e.g., Syntax Error)"
                        },
                        "line": {
                            "type": "STRING",
                            "description": "Line number or location"
                        },
                        "description": {
                            "type": "STRING",
                            "description": "Simple beginner-friendly explanation of what is wrong"
                        },
                        "fix": {
                            "type": "STRING",
                            "description": "The corrected code line"
                        }
                    },
                    "required": REQUIRED_ERROR_FIELDS
                }
            },
            "correctSyntax": {
                "type": "STRING",
                "description": "The corrected code snippet focusing on syntax"
            },
            "explanation": {
                "type": "STRING",
                "description": "A simple, tutor-style explanation of why the errors happened (max 3 lines)"
            },
            "simplifiedLogic": {
                "type": "STRING",
                "description": "A cleaner, simpler version of the logic (optional)"
            },
            "formattedCode": {
                "type": "STRING",
                "description": "The full, properly indented and formatted code"
            },
            "learningTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Short 1-line memory shortcuts for the user"
            },
            "output": {
                "type": "STRING",
                "description": "The console output the corrected code would print"
            }
        },
        "required": REQUIRED_FIELDS
    })
}
