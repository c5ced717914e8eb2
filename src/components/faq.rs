//! FAQ accordion. One answer open at a time; the open index is the only
//! state, owned by the parent so every question renders from the same truth.

use yew::prelude::*;

pub const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "Who can participate in HACK HUB?",
        "Anyone with a passion for building. Students, professionals, and \
         first-time hackers are all welcome. Teams of 2 to 4 members can \
         register; solo hackers can find teammates at the venue.",
    ),
    (
        "Do I need to pay to participate?",
        "No. Registration is completely free and includes meals, swag, and \
         24 hours of caffeine.",
    ),
    (
        "What should I bring?",
        "Your laptop, chargers, a valid ID, and whatever hardware your hack \
         needs. We provide the WiFi, power strips, food, and workspace.",
    ),
    (
        "Can I start working on my project before the event?",
        "No. All code must be written during the 24 hours. You can come with \
         ideas, mockups, and a plan, but the repository starts empty.",
    ),
    (
        "How are projects judged?",
        "A panel of industry judges scores innovation, technical depth, \
         design, and presentation. Finalists demo live on the main stage.",
    ),
    (
        "Is there overnight accommodation?",
        "The venue stays open the full 24 hours with rest zones and sleeping \
         bags available. You hack, nap, and repeat on site.",
    ),
];

/// Where clicking question `clicked` leaves the accordion: an already-open
/// question closes everything, any other question becomes the open one.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    index: usize,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_toggle.emit(index))
    };
    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class={classes!("faq-answer", props.open.then_some("active"))}>
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |clicked: usize| open.set(toggle(*open, clicked)))
    };

    html! {
        <div class="faq-list">
            { for FAQ_ITEMS.iter().enumerate().map(|(index, &(question, answer))| html! {
                <FaqItem
                    key={index}
                    {question}
                    {answer}
                    {index}
                    open={*open == Some(index)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}
