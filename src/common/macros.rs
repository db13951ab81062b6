/// Runs a fallible future as a detached task whose error is only logged.
///
/// Usage: `detach!(spawner, "profile language sync", fut);`
#[macro_export]
macro_rules! detach {
    ($spawner:expr, $what:expr, $fut:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        let what: &'static str = $what;
        let fut = $fut;

        $spawner.spawn_detached(::std::boxed::Box::pin(async move {
            if let Err(e) = fut.await {
                ::log::warn!("{} failed ({}): {}", what, location, e);
            }
        }));
    }};
}
