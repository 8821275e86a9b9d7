//! Workspace-level integration tests for fibwasm live under `tests/`.
