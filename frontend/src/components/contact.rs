//! Contact form page.
//!
//! Submission posts the form to the content API. A structured API error
//! surfaces its own `message`; a transport error falls back to a localized
//! generic string. Both render inline next to the submit button, the page
//! itself never crashes on failure.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::locale::Locale;
use common::model::contact::ContactMessageInput;

use crate::api::{ApiClient, ApiError};
use crate::labels;
use crate::services::contact::ContactService;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Properties, PartialEq)]
pub struct ContactPageProps {
    pub locale: Locale,
}

pub enum Msg {
    UpdateName(String),
    UpdateEmail(String),
    UpdatePhone(String),
    UpdateMessage(String),
    Submit,
    SubmitOk,
    SubmitErr(String),
}

pub struct ContactPage {
    api: ApiClient,
    name: String,
    email: String,
    phone: String,
    message: String,
    sending: bool,
    sent: bool,
    error: Option<String>,
    alive: Rc<Cell<bool>>,
}

impl Component for ContactPage {
    type Message = Msg;
    type Properties = ContactPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ContactPage {
            api: ApiClient::from_context(ctx),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            sending: false,
            sent: false,
            error: None,
            alive: Rc::new(Cell::new(true)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(value) => {
                self.name = value;
                false
            }
            Msg::UpdateEmail(value) => {
                self.email = value;
                false
            }
            Msg::UpdatePhone(value) => {
                self.phone = value;
                false
            }
            Msg::UpdateMessage(value) => {
                self.message = value;
                false
            }
            Msg::Submit => {
                self.sending = true;
                self.sent = false;
                self.error = None;
                self.submit(ctx);
                true
            }
            Msg::SubmitOk => {
                self.sending = false;
                self.sent = true;
                self.name.clear();
                self.email.clear();
                self.phone.clear();
                self.message.clear();
                true
            }
            Msg::SubmitErr(message) => {
                self.sending = false;
                self.error = Some(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        let link = ctx.link();

        let onsubmit = link.callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        let input_value = |msg: fn(String) -> Msg| {
            link.callback(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                msg(input.value())
            })
        };
        let textarea_value = link.callback(|event: InputEvent| {
            let textarea: HtmlTextAreaElement = event.target_unchecked_into();
            Msg::UpdateMessage(textarea.value())
        });

        html! {
            <section class="contact-page">
                <h2>{ labels::contact_title(locale) }</h2>
                <form {onsubmit}>
                    <div class="form-group">
                        <label>{ labels::field_name(locale) }</label>
                        <input
                            type="text"
                            name="name"
                            value={self.name.clone()}
                            oninput={input_value(Msg::UpdateName)}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label>{ labels::field_email(locale) }</label>
                        <input
                            type="email"
                            name="email"
                            value={self.email.clone()}
                            oninput={input_value(Msg::UpdateEmail)}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label>{ labels::field_phone(locale) }</label>
                        <input
                            type="text"
                            name="phone"
                            value={self.phone.clone()}
                            oninput={input_value(Msg::UpdatePhone)}
                        />
                    </div>
                    <div class="form-group">
                        <label>{ labels::field_message(locale) }</label>
                        <textarea
                            name="message"
                            value={self.message.clone()}
                            oninput={textarea_value}
                            required=true
                        />
                    </div>
                    <button type="submit" class="submit-button" disabled={self.sending}>
                        {
                            if self.sending {
                                labels::sending(locale)
                            } else {
                                labels::send(locale)
                            }
                        }
                    </button>
                </form>
                {
                    if self.sent {
                        html! { <p class="success-message">{ labels::message_sent(locale) }</p> }
                    } else {
                        html! {}
                    }
                }
                {
                    match &self.error {
                        Some(message) => html! { <p class="error-message">{ message }</p> },
                        None => html! {},
                    }
                }
            </section>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.alive.set(false);
    }
}

impl ContactPage {
    fn submit(&self, ctx: &Context<Self>) {
        let locale = ctx.props().locale;
        let input = ContactMessageInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            message: self.message.clone(),
        };

        let service = ContactService::new(self.api.clone());
        let alive = self.alive.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let msg = match service.create_message(&input).await {
                Ok(_created) => Msg::SubmitOk,
                // The API's own message is user-facing; transport failures
                // get the localized fallback.
                Err(ApiError::Api { message, .. }) => Msg::SubmitErr(message),
                Err(ApiError::Transport(_)) => {
                    Msg::SubmitErr(labels::generic_error(locale).to_string())
                }
            };
            if alive.get() {
                link.send_message(msg);
            }
        });
    }
}
