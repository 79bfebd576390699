//! Product catalog page: category filter bar, product grid and a modal with
//! a round-robin image carousel.
//!
//! Categories and products load together; only active records are shown and
//! categories follow their admin-assigned order. Slide changes in the modal
//! fade out for 300 ms before the index advances, matching the original
//! site's transition.

mod card;

use gloo_console::error;
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::locale::Locale;
use common::model::product::{Category, Product};

use crate::api::ApiClient;
use crate::labels;
use crate::services::products::ProductsService;

use card::ProductCard;

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub enum SlideDirection {
    Next,
    Prev,
}

#[derive(Properties, PartialEq)]
pub struct ProductsPageProps {
    pub locale: Locale,
}

pub enum Msg {
    CatalogLoaded {
        categories: Vec<Category>,
        products: Vec<Product>,
    },
    CatalogFailed,
    SelectCategory(Option<String>),
    OpenProduct(Product),
    CloseModal,
    BeginSlide(SlideDirection),
    AdvanceSlide(SlideDirection),
}

pub struct ProductsPage {
    api: ApiClient,
    categories: Vec<Category>,
    products: Vec<Product>,
    loading: bool,
    /// `None` selects the "all" pseudo-category.
    active_category: Option<String>,
    selected: Option<Product>,
    current_image: usize,
    fade_in: bool,
    loaded: bool,
    alive: Rc<Cell<bool>>,
}

impl Component for ProductsPage {
    type Message = Msg;
    type Properties = ProductsPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProductsPage {
            api: ApiClient::from_context(ctx),
            categories: Vec::new(),
            products: Vec::new(),
            loading: true,
            active_category: None,
            selected: None,
            current_image: 0,
            fade_in: true,
            loaded: false,
            alive: Rc::new(Cell::new(true)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CatalogLoaded {
                categories,
                products,
            } => {
                self.categories = categories;
                self.products = products;
                self.loading = false;
                true
            }
            Msg::CatalogFailed => {
                // Renders an empty grid, same as no published products.
                self.loading = false;
                true
            }
            Msg::SelectCategory(category_id) => {
                self.active_category = category_id;
                true
            }
            Msg::OpenProduct(product) => {
                self.selected = Some(product);
                self.current_image = 0;
                self.fade_in = true;
                true
            }
            Msg::CloseModal => {
                self.selected = None;
                true
            }
            Msg::BeginSlide(direction) => {
                let Some(images) = self.selected.as_ref().and_then(|p| p.images.as_ref()) else {
                    return false;
                };
                if images.len() < 2 {
                    return false;
                }
                self.fade_in = false;

                let alive = self.alive.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(300).await;
                    if alive.get() {
                        link.send_message(Msg::AdvanceSlide(direction));
                    }
                });
                true
            }
            Msg::AdvanceSlide(direction) => {
                let Some(images) = self.selected.as_ref().and_then(|p| p.images.as_ref()) else {
                    return false;
                };
                let len = images.len();
                self.current_image = match direction {
                    SlideDirection::Next => (self.current_image + 1) % len,
                    SlideDirection::Prev => (self.current_image + len - 1) % len,
                };
                self.fade_in = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;

        if self.loading {
            return html! { <p class="loading">{ labels::loading(locale) }</p> };
        }

        html! {
            <section class="products-page">
                { self.render_category_bar(ctx, locale) }
                { self.render_grid(ctx, locale) }
                { self.render_modal(ctx, locale) }
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let service = ProductsService::new(self.api.clone());
            let alive = self.alive.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let msg = match service.load_catalog().await {
                    Ok((categories, products)) => Msg::CatalogLoaded {
                        categories,
                        products,
                    },
                    Err(err) => {
                        error!(format!("catalog could not be loaded: {err}"));
                        Msg::CatalogFailed
                    }
                };
                if alive.get() {
                    link.send_message(msg);
                }
            });
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.alive.set(false);
    }
}

impl ProductsPage {
    fn render_category_bar(&self, ctx: &Context<Self>, locale: Locale) -> Html {
        let link = ctx.link();
        let all_class = classes!(
            "category-button",
            self.active_category.is_none().then_some("active"),
        );

        html! {
            <div class="category-bar">
                <button class={all_class} onclick={link.callback(|_| Msg::SelectCategory(None))}>
                    { labels::all_categories(locale) }
                </button>
                {
                    for self.categories.iter().map(|category| {
                        let id = category.id.clone();
                        let class = classes!(
                            "category-button",
                            (self.active_category.as_deref() == Some(&category.id))
                                .then_some("active"),
                        );
                        html! {
                            <button
                                {class}
                                onclick={link.callback(move |_| Msg::SelectCategory(Some(id.clone())))}
                            >
                                { category.name(locale) }
                            </button>
                        }
                    })
                }
            </div>
        }
    }

    fn render_grid(&self, ctx: &Context<Self>, locale: Locale) -> Html {
        let link = ctx.link();
        let visible = self.products.iter().filter(|product| {
            self.active_category
                .as_deref()
                .is_none_or(|active| product.category_id == active)
        });

        html! {
            <div class="products-grid">
                {
                    for visible.map(|product| html! {
                        <ProductCard
                            key={product.id.clone()}
                            product={product.clone()}
                            {locale}
                            on_click={link.callback(Msg::OpenProduct)}
                        />
                    })
                }
            </div>
        }
    }

    fn render_modal(&self, ctx: &Context<Self>, locale: Locale) -> Html {
        let Some(product) = &self.selected else {
            return html! {};
        };
        let link = ctx.link();

        let slider = match product.images.as_deref() {
            Some(images) if !images.is_empty() => {
                let image = &images[self.current_image.min(images.len() - 1)];
                let image_class = classes!(
                    "slider-image",
                    if self.fade_in { "fade-in" } else { "fade-out" },
                );
                html! {
                    <div class="slider">
                        <img
                            class={image_class}
                            src={self.api.file_url(&image.file_path)}
                            alt={image.original_name.clone()}
                        />
                        {
                            if images.len() > 1 {
                                html! {
                                    <>
                                        <button
                                            class="prev-button"
                                            onclick={link.callback(|event: MouseEvent| {
                                                event.stop_propagation();
                                                Msg::BeginSlide(SlideDirection::Prev)
                                            })}
                                        >
                                            { "‹" }
                                        </button>
                                        <button
                                            class="next-button"
                                            onclick={link.callback(|event: MouseEvent| {
                                                event.stop_propagation();
                                                Msg::BeginSlide(SlideDirection::Next)
                                            })}
                                        >
                                            { "›" }
                                        </button>
                                    </>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }
            _ => html! {},
        };

        html! {
            <div class="modal-backdrop" onclick={link.callback(|_| Msg::CloseModal)}>
                <div
                    class="modal-content"
                    onclick={Callback::from(|event: MouseEvent| event.stop_propagation())}
                >
                    { slider }
                    <div class="modal-product-name">{ product.name(locale) }</div>
                    {
                        match product.description(locale) {
                            Some(description) => html! {
                                <p class="modal-product-description">{ description }</p>
                            },
                            None => html! {},
                        }
                    }
                    <div class="modal-product-price">{ format!("{:.2}₺", product.price) }</div>
                    <button class="close-button" onclick={link.callback(|_| Msg::CloseModal)}>
                        { "✕" }
                    </button>
                </div>
            </div>
        }
    }
}
