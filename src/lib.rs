//! Workspace-level integration tests for Strassen-rs live in `tests/`.
