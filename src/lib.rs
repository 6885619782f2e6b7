//! Textlens - A Terminal User Interface (TUI) for the text analysis service
//!
//! This library provides a terminal-based client for a remote text and
//! password analysis service. It lets an operator exercise the service's
//! four endpoints (health check, service info, text analysis, password
//! analysis) and inspect the raw responses, with a rich interactive UI
//! built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Analysis service client and data structures
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup
//! * [`ui`] - Terminal user interface components

/// Analysis service client and data models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Logging setup for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;
