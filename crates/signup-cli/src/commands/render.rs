use anyhow::Result;
use maud::{html, DOCTYPE};
use signup_forms::{render, FormConfig, FormState, Record};
use tracing::debug;

pub fn execute(record: Record, config: FormConfig, submitted: bool) -> Result<()> {
    let mut form = FormState::with_defaults(record, config);

    if submitted {
        // A rejected attempt only marks errors visible and sets focus
        let outcome = form.submit(|_| ())?;
        debug!("Render after submit: accepted = {}", outcome.is_accepted());
    }

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Register" }
            }
            body {
                (render::form(&form))
            }
        }
    };

    println!("{}", page.into_string());
    Ok(())
}
