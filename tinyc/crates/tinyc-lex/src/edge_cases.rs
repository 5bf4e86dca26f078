//! Edge case tests for tinyc-lex
