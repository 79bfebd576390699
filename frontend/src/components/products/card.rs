//! Grid card for a single product with its own small image slider.
//!
//! Cards with more than one image auto-advance every three seconds unless
//! hovered; the interval is dropped with the component, so no timer outlives
//! the card.

use gloo_timers::callback::Interval;
use yew::prelude::*;

use common::locale::Locale;
use common::model::product::Product;

use crate::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub locale: Locale,
    pub on_click: Callback<Product>,
}

pub enum Msg {
    Tick,
    Prev,
    Next,
    HoverStart,
    HoverEnd,
    Clicked,
}

pub struct ProductCard {
    api: ApiClient,
    current: usize,
    hovering: bool,
    _interval: Option<Interval>,
}

fn auto_advance(ctx: &Context<ProductCard>) -> Option<Interval> {
    let image_count = ctx
        .props()
        .product
        .images
        .as_ref()
        .map_or(0, |images| images.len());

    (image_count > 1).then(|| {
        let link = ctx.link().clone();
        Interval::new(3_000, move || link.send_message(Msg::Tick))
    })
}

impl Component for ProductCard {
    type Message = Msg;
    type Properties = ProductCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProductCard {
            api: ApiClient::from_context(ctx),
            current: 0,
            hovering: false,
            _interval: auto_advance(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let image_count = ctx
            .props()
            .product
            .images
            .as_ref()
            .map_or(0, |images| images.len());

        match msg {
            Msg::Tick => {
                if self.hovering || image_count < 2 {
                    return false;
                }
                self.current = (self.current + 1) % image_count;
                true
            }
            Msg::Prev => {
                if image_count < 2 {
                    return false;
                }
                self.current = (self.current + image_count - 1) % image_count;
                true
            }
            Msg::Next => {
                if image_count < 2 {
                    return false;
                }
                self.current = (self.current + 1) % image_count;
                true
            }
            Msg::HoverStart => {
                self.hovering = true;
                false
            }
            Msg::HoverEnd => {
                self.hovering = false;
                false
            }
            Msg::Clicked => {
                ctx.props().on_click.emit(ctx.props().product.clone());
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().product.id != old_props.product.id {
            self.current = 0;
            self._interval = auto_advance(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();
        let product = &props.product;

        let image_area = match product.images.as_deref() {
            Some(images) if !images.is_empty() => {
                let image = &images[self.current.min(images.len() - 1)];
                html! {
                    <>
                        <img
                            class="product-image-main"
                            src={self.api.file_url(&image.file_path)}
                            alt={product.name(props.locale).to_string()}
                        />
                        {
                            if images.len() > 1 {
                                html! {
                                    <div class="thumbnail-controls">
                                        <button
                                            onclick={link.callback(|event: MouseEvent| {
                                                event.stop_propagation();
                                                Msg::Prev
                                            })}
                                        >
                                            { "‹" }
                                        </button>
                                        <div class="thumbnail-dots">
                                            {
                                                for (0..images.len()).map(|index| {
                                                    let class = classes!(
                                                        "thumbnail-dot",
                                                        (index == self.current).then_some("active"),
                                                    );
                                                    html! { <span {class} /> }
                                                })
                                            }
                                        </div>
                                        <button
                                            onclick={link.callback(|event: MouseEvent| {
                                                event.stop_propagation();
                                                Msg::Next
                                            })}
                                        >
                                            { "›" }
                                        </button>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </>
                }
            }
            _ => html! { <div class="product-image-placeholder" /> },
        };

        html! {
            <div
                class="product-card"
                onclick={link.callback(|_| Msg::Clicked)}
                onmouseenter={link.callback(|_| Msg::HoverStart)}
                onmouseleave={link.callback(|_| Msg::HoverEnd)}
            >
                <div class="product-image">{ image_area }</div>
                <div class="product-content">
                    <div class="product-name">{ product.name(props.locale) }</div>
                    <div class="product-price">{ format!("{:.2}₺", product.price) }</div>
                </div>
            </div>
        }
    }
}
