//! Tree transforms applied between conversion and rendering.
//!
//! - `pre_language`: copies the detected code-block language onto the
//!   wrapping `<pre>` element.

/// Code-block language annotation for `<pre>` wrappers.
pub mod pre_language;
