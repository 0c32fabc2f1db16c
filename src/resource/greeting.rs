/// Landing page text
pub const GREETING: &str = "Hello World! Welcome to the Search Facade REST API.";

pub async fn greeting() -> &'static str {
    GREETING
}
