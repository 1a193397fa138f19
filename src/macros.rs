/// Builds a [`reqwest::Client`] with the given user agent, propagating build failures with `?`.
#[macro_export]
macro_rules! client {
    ($x:expr) => {{
        $crate::reqwest::Client::builder().user_agent($x).build()?
    }};
}
