//! Prompt text for analysis and execution requests

/// System instruction sent with analysis requests
pub const TUTOR_SYSTEM_INSTRUCTION: &str =
    "You are a helpful coding assistant for students. Be encouraging and clear.";

const ANALYSIS_PREAMBLE: &str = "\
You are a friendly, world-class Computer Science tutor for beginners.
Analyze the following code snippet.

Your goals:
1. Detect the language (Java, C, C++, Python, JavaScript).
2. Find syntax errors (missing semicolons, brackets, types) and logic risks (null pointers, loops).
3. Explain clearly in simple English (no heavy jargon).
4. Provide a corrected version.
5. Provide a simplified logic version if the code is overly complex.
6. Return the final code formatted beautifully.
7. Show the console output the corrected code would print.";

const EXECUTION_PREAMBLE: &str = "\
Act as a code runner. Mentally run the following code and reply with exactly
what it would print to the console.

Rules:
- If the code has errors, fix them first and run the corrected version.
- Reply with the console output only.
- Do not wrap the output in markdown code fences.
- Do not add explanations, headings or commentary.";

/// Tutoring prompt followed by the user's code
pub fn analysis_prompt(code: &str) -> String {
    format!("{ANALYSIS_PREAMBLE}\n\nUser Code:\n{code}\n")
}

/// Simulated-execution prompt followed by the user's code
pub fn execution_prompt(code: &str) -> String {
    format!("{EXECUTION_PREAMBLE}\n\nCode:\n{code}\n")
}
