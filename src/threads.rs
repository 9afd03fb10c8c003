use std::thread::JoinHandle;

/// Named thread whose panics are logged instead of silently ending it.
pub struct LoopThread {
    name: &'static str,
    stack_kb: Option<usize>,
}

impl LoopThread {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            stack_kb: None,
        }
    }

    pub fn with_stack_size(mut self, stack_kb: usize) -> Self {
        self.stack_kb = Some(stack_kb);
        self
    }

    pub fn spawn<F>(self, func: F) -> std::io::Result<JoinHandle<()>>
    where
        F: FnOnce() + Send + 'static,
    {
        let Self { name, stack_kb } = self;

        let mut builder = std::thread::Builder::new().name(name.to_string());
        if let Some(stack_kb) = stack_kb {
            builder = builder.stack_size(stack_kb * 1024);
        }

        builder.spawn(move || {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(func));
            if let Err(err) = result {
                log::error!("[{name}] Thread panicked: {:?}", panic_message(&*err));
            }
        })
    }
}

fn panic_message(err: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = err.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = err.downcast_ref::<String>() {
        message.as_str()
    } else {
        "<non-string panic payload>"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_the_closure_on_a_named_thread() {
        let (tx, rx) = std::sync::mpsc::channel();
        let handle = LoopThread::new("named")
            .with_stack_size(64)
            .spawn(move || {
                let name = std::thread::current().name().map(str::to_string);
                tx.send(name).unwrap();
            })
            .unwrap();
        handle.join().unwrap();
        assert_eq!(rx.recv().unwrap().as_deref(), Some("named"));
    }

    #[test]
    fn panics_are_contained() {
        let handle = LoopThread::new("panicky")
            .spawn(|| panic!("boom"))
            .unwrap();
        assert!(handle.join().is_ok());
    }
}
