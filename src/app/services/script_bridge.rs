use std::cell::RefCell;
use std::rc::Rc;

use crate::app::infrastructure::error::Result;

/// Runs script text inside the hosted document.
///
/// The page and its editor script are supplied by the embedding application;
/// this trait is the only thing the editor host knows about them.
pub trait ScriptBridge {
    fn evaluate(&mut self, script: &str) -> Result<()>;
}

/// Keeps every evaluated script in memory. The log is shared so a view can
/// display it while the editor host owns the bridge.
#[derive(Debug, Clone, Default)]
pub struct RecordingBridge {
    log: Rc<RefCell<Vec<String>>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Rc<RefCell<Vec<String>>> {
        self.log.clone()
    }

    pub fn scripts(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl ScriptBridge for RecordingBridge {
    fn evaluate(&mut self, script: &str) -> Result<()> {
        self.log.borrow_mut().push(script.to_string());
        Ok(())
    }
}

/// Adapts a closure into a bridge.
pub struct ClosureBridge<F>(F);

impl<F> ClosureBridge<F>
where
    F: FnMut(&str) -> Result<()>,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ScriptBridge for ClosureBridge<F>
where
    F: FnMut(&str) -> Result<()>,
{
    fn evaluate(&mut self, script: &str) -> Result<()> {
        (self.0)(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_recording_bridge_shares_log() {
        let mut bridge = RecordingBridge::new();
        let log = bridge.log();
        bridge.evaluate("a();").unwrap();
        bridge.evaluate("b();").unwrap();
        assert_eq!(*log.borrow(), vec!["a();".to_string(), "b();".to_string()]);
        assert_eq!(bridge.scripts().len(), 2);
    }

    #[test]
    fn test_closure_bridge_propagates_errors() {
        let mut bridge = ClosureBridge::new(|script: &str| {
            if script.is_empty() {
                Err(AppError::Script("empty script".to_string()))
            } else {
                Ok(())
            }
        });
        assert!(bridge.evaluate("x();").is_ok());
        assert!(matches!(bridge.evaluate(""), Err(AppError::Script(_))));
    }
}
