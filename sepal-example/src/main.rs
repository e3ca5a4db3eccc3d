use sepal_core::{Attributes, RenderOptionsBuilder};
use sepal_html::prelude::*;

fn main() {
    // One options value configures the whole render pass.
    let options = RenderOptionsBuilder::default()
        .test_attributes(true)
        .build()
        .expect("render options");

    let email = Attributes::with_options(options)
        .id("email")
        .r#type("email")
        .name("email")
        .placeholder("you@example.com")
        .maxlength(64)
        .required_if(true)
        .data_test(Some("login-email"));

    let submit = sepal_html::factory::r#type("submit")
        .class("button primary")
        .on_click("submit()")
        .disabled_if(false)
        .data_theme("b");

    println!("<form{}>", sepal_html::factory::action("/login"));
    println!("  <input{} />", email);
    println!("  <button{}>Sign in</button>", submit);
    println!("</form>");
}
