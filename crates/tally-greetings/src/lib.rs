/// Returns a greeting for `name`.
///
/// ```
/// assert_eq!(tally_greetings::greet("Gladys"), "Hi, Gladys. Welcome!");
/// ```
pub fn greet(name: &str) -> String {
    let message = format!("Hi, {}. Welcome!", name);
    log::trace!("greeting built for {:?}", name);
    message
}
