//! A signup form: a username field and a status label, each with its own
//! validator, wired to log every validity flip.
//!
//! Run with `RUST_LOG`-style verbosity fixed at DEBUG:
//!
//! ```sh
//! cargo run -p textguard --example signup_form
//! ```

use std::rc::Rc;

use textguard::prelude::*;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let username = StringValidator::from_rules(
        ValidationRules::new()
            .with_min_length(3)
            .with_max_length(12)
            .with_pattern("[a-z][a-z0-9_]*"),
    )?
    .into_shared();

    {
        let mut v = username.borrow_mut();
        v.set_on_valid(|_: &StringValidator| println!("username: ok"));
        v.set_on_invalid(|v: &StringValidator| {
            let facet = if v.is_length_valid() { "pattern" } else { "length" };
            println!("username: invalid ({facet})");
        });
    }

    let mut field = TextField::new().with_placeholder("username");
    field.set_string_validator(Some(Rc::clone(&username)));

    for c in "al1ce".chars() {
        field.insert_char(c);
    }
    field.insert_char('!');
    field.delete_backward();

    if let Err(errors) = username.borrow().explain("A") {
        print!("{errors}");
    }

    let mut status = Label::new();
    let nonempty = StringValidator::new(Some(1), None, None)?.into_shared();
    status.set_string_validator(Some(nonempty));
    status.set_text("ready");

    Ok(())
}
