use dioxus::prelude::*;
use crate::utils::timer::sleep;
use crate::utils::Typewriter;

/// Cycles through `words` (comma separated) with a typing animation.
#[component]
pub fn Typing(words: String) -> Element {
    let mut text = use_signal(String::new);
    let list = words.clone();

    use_future(move || {
        let list = list.clone();
        async move {
            let mut typewriter = Typewriter::from_list(&list);
            log::debug!("Typing effect started with {} words", typewriter.words().len());
            loop {
                let step = typewriter.tick();
                text.set(step.text);
                sleep(step.delay).await;
            }
        }
    });

    rsx! {
        span { class: "typing", "data-words": "{words}", "{text}" }
    }
}
