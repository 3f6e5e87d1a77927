use super::events::Event;
use super::types::Command;

/// Trait for dispatching task commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received, on the caller's thread.
/// - **Atomicity**: A command either applies fully or not at all.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in the order they happened.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_trait_is_implementable() {
        struct TestStore;
        impl Store for TestStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Ok(vec![Event::TasksDeleted { ids: vec![] }])
            }
        }
        let mut store = TestStore;
        let result = store.dispatch(Command::ClearCompleted);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn test_store_impl_can_return_error() {
        struct FailingStore;
        impl Store for FailingStore {
            type Error = String;
            fn dispatch(&mut self, _cmd: Command) -> Result<Vec<Event>, String> {
                Err("rejected".to_string())
            }
        }
        let mut store = FailingStore;
        assert!(store.dispatch(Command::ClearCompleted).is_err());
    }
}
