// Test fixtures with known input documents and expected outputs
// WHY: Golden-file testing requires deterministic input/output pairs for validation

/// Canonical lowercase UUID used across tests
pub const UUID_FIRST: &str = "123e4567-e89b-12d3-a456-426614174000";

/// Second distinct UUID, all-zeros form
pub const UUID_SECOND: &str = "00000000-0000-0000-0000-000000000001";

/// Text with no UUID-shaped substrings at all
pub const NO_UUID_TEXT: &str =
    "Plain prose with numbers 1234-5678 and words, but nothing UUID-shaped.\n";

/// Two distinct UUIDs, the first appearing twice
pub const SCENARIO_TEXT: &str = "A: 123e4567-e89b-12d3-a456-426614174000, B: 123e4567-e89b-12d3-a456-426614174000, C: 00000000-0000-0000-0000-000000000001";

/// Expected rewrite of SCENARIO_TEXT with the default template
pub const SCENARIO_EXPECTED: &str = "A: ,,UUID-001,,, B: ,,UUID-001,,, C: ,,UUID-002,,";

/// Expected text glossary for SCENARIO_TEXT
/// Format: one `# <placeholder> -> <uuid>` line per entry, first-appearance order
pub const SCENARIO_GLOSSARY_EXPECTED: &str = "# ,,UUID-001,, -> 123e4567-e89b-12d3-a456-426614174000\n# ,,UUID-002,, -> 00000000-0000-0000-0000-000000000001\n";

/// Near-miss strings that must never be replaced
/// WHY: word-boundary isolation and exact group shapes are the matching contract
pub const MALFORMED_TEXT: &str = r#"short group: 123e456-e89b-12d3-a456-426614174000
missing group: 123e4567-e89b-12d3-a456
non-hex: 123g4567-e89b-12d3-a456-426614174000
embedded: x123e4567-e89b-12d3-a456-426614174000
trailing digit: 123e4567-e89b-12d3-a456-4266141740001
underscores: 123e4567_e89b_12d3_a456_426614174000
"#;

/// Multi-line log excerpt mixing repeated, distinct, and mixed-case UUIDs
pub const LOG_TEXT: &str = r#"2024-01-09 request 123e4567-e89b-12d3-a456-426614174000 accepted
2024-01-09 request 123E4567-E89B-12D3-A456-426614174000 retried
2024-01-09 request 00000000-0000-0000-0000-000000000001 accepted
2024-01-09 request 123e4567-e89b-12d3-a456-426614174000 completed
"#;
