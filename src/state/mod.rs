/// State management module
///
/// All application state lives in the session state machine (session.rs):
/// selected images, preview list, analysis report, analyzing flag. The
/// session is pure; async results flow back into it through sequenced
/// completion calls.

pub mod session;
