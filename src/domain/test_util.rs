use anyhow::anyhow;

/// Connectivity represents the "connected" state of a faked driven port and provides
/// common behavior for returning an error if the port is configured to be disconnected.
pub enum Connectivity {
    Connected,
    Disconnected,
}

impl Connectivity {
    /// Return an error if connectivity is in a "disconnected" state
    pub fn blow_up_if_disconnected(&self) -> Result<(), anyhow::Error> {
        match self {
            Self::Connected => Ok(()),
            Self::Disconnected => Err(anyhow!("could not reach the todo store!")),
        }
    }
}

/// FakeImplementation stands in for a single trait method on a mock. It records the arguments
/// of every call and hands back a preconfigured value, which is enough to mock async trait
/// methods without a mocking framework.
///
/// * [Args] is the captured argument tuple for one call
/// * [Ret] is the method's return type
///
/// # Example
///
/// ```ignore
/// struct FakeTodoPort {
///     todo_by_id_result: FakeImplementation<i32, Result<Option<Todo>, TodoError>>,
/// }
///
/// impl TodoPort for Mutex<FakeTodoPort> {
///     async fn todo_by_id(&self, id: i32, _store: &impl TodoStore) -> Result<Option<Todo>, TodoError> {
///         let mut locked_self = self.lock().unwrap();
///         locked_self.todo_by_id_result.save_arguments(id);
///         locked_self.todo_by_id_result.return_value_result()
///     }
/// }
/// ```
pub struct FakeImplementation<Args, Ret> {
    saved_arguments: Vec<Args>,
    return_value: Option<Ret>,
}

impl<Args, Ret> FakeImplementation<Args, Ret> {
    pub fn new() -> FakeImplementation<Args, Ret> {
        FakeImplementation {
            saved_arguments: Vec::new(),
            return_value: None,
        }
    }

    /// Saves arguments from a single invocation
    pub fn save_arguments(&mut self, arguments: Args) {
        self.saved_arguments.push(arguments)
    }

    /// Every argument set this fake has been invoked with, oldest first
    pub fn calls(&self) -> &[Args] {
        self.saved_arguments.as_slice()
    }
}

impl<Args, Success, Fail> FakeImplementation<Args, Result<Success, Fail>>
where
    Success: Clone,
    Fail: Clone,
{
    /// Sets the result handed back on every invocation
    pub fn set_returned_result(&mut self, return_value: Result<Success, Fail>) {
        self.return_value = Some(return_value);
    }

    /// Retrieves a copy of the configured result. Panics if none was configured.
    pub fn return_value_result(&self) -> Result<Success, Fail> {
        match self.return_value {
            Some(Ok(ref ok_result)) => Ok(ok_result.clone()),
            Some(Err(ref err)) => Err(err.clone()),
            None => panic!("Tried to return from a function where the return value wasn't set!"),
        }
    }
}
