use cellscheme::{Error, Interpreter};


pub fn setup() -> Interpreter<'static> {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::new()
}

pub fn results<S: AsRef<str>>(interpreter: &Interpreter, inputs: &[S]) -> Vec<String> {
    inputs
        .iter()
        .map(|input| match interpreter.run(input) {
            Ok(val) => val,
            Err(err) => panic!("{:?} failed: {}", input.as_ref(), err),
        })
        .collect::<Vec<_>>()
}

pub fn error<S: AsRef<str>>(interpreter: &Interpreter, input: S) -> Error {
    match interpreter.run(input.as_ref()) {
        Ok(val) => panic!("{:?} succeeded with {}", input.as_ref(), val),
        Err(err) => err,
    }
}
