//! News Page
//!
//! Session-only alert board with a publishing form.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, IntoElement, ParentElement, Render,
    SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::card::Card;
use crate::components::primitives::badge::Badge;
use crate::components::primitives::button::Button;
use crate::components::primitives::link::ExternalLink;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::news::{NewsDraft, NewsItem};
use crate::features::news::controller::NewsController;
use crate::i18n::{t, Locale};
use crate::theme::colors::ArancelColors;

/// News page component
pub struct NewsPage {
    entities: AppEntities,
    controller: NewsController,
    date_input: Entity<TextInput>,
    title_input: Entity<TextInput>,
    detail_input: Entity<TextInput>,
    source_input: Entity<TextInput>,
    url_input: Entity<TextInput>,
}

impl NewsPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = NewsController::new(entities.clone());
        let locale = entities.i18n.read(cx).locale;

        let date_input = text_input("news-date", "", t(locale, "news-date-placeholder"), cx);
        let title_input = text_input("news-title", "", t(locale, "news-title-placeholder"), cx);
        let detail_input = text_input("news-detail", "", t(locale, "news-detail-placeholder"), cx);
        let source_input = text_input("news-source", "", t(locale, "news-source-placeholder"), cx);
        let url_input = text_input("news-url", "", t(locale, "news-url-placeholder"), cx);

        Self::bind(&date_input, &entities, cx, |draft, text| draft.date = text);
        Self::bind(&title_input, &entities, cx, |draft, text| {
            draft.title = text
        });
        Self::bind(&detail_input, &entities, cx, |draft, text| {
            draft.detail = text
        });
        Self::bind(&source_input, &entities, cx, |draft, text| {
            draft.source = text
        });
        Self::bind(&url_input, &entities, cx, |draft, text| draft.url = text);

        // Observe news changes
        cx.observe(&entities.news, |_this, _, cx| cx.notify())
            .detach();

        cx.observe(&entities.i18n, |this: &mut Self, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.set_placeholders(locale, cx);
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            date_input,
            title_input,
            detail_input,
            source_input,
            url_input,
        }
    }

    /// Mirror typed text into the news draft
    fn bind(
        input: &Entity<TextInput>,
        entities: &AppEntities,
        cx: &mut Context<Self>,
        apply: impl Fn(&mut NewsDraft, String) + 'static,
    ) {
        let news = entities.news.clone();
        input.update(cx, |input, _| {
            input.on_change(move |value, cx| {
                let text = value.to_string();
                news.update(cx, |state, _| {
                    apply(&mut state.draft, text);
                });
            });
        });
    }

    fn set_placeholders(&self, locale: Locale, cx: &mut Context<Self>) {
        let placeholders = [
            (&self.date_input, "news-date-placeholder"),
            (&self.title_input, "news-title-placeholder"),
            (&self.detail_input, "news-detail-placeholder"),
            (&self.source_input, "news-source-placeholder"),
            (&self.url_input, "news-url-placeholder"),
        ];
        for (input, key) in placeholders {
            input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, key));
                cx.notify();
            });
        }
    }

    fn clear_form(&self, cx: &mut Context<Self>) {
        let inputs = [
            &self.date_input,
            &self.title_input,
            &self.detail_input,
            &self.source_input,
            &self.url_input,
        ];
        for input in inputs {
            input.update(cx, |input, cx| {
                input.set_value("");
                cx.notify();
            });
        }
    }

    fn render_news_item(&self, item: &NewsItem, no_date: SharedString, view_source: SharedString) -> impl IntoElement {
        let date = if item.date.trim().is_empty() {
            no_date
        } else {
            SharedString::from(item.date.clone())
        };

        div()
            .w_full()
            .p_3()
            .rounded_md()
            .bg(ArancelColors::table_row_alt())
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .text_xs()
                    .text_color(ArancelColors::text_secondary())
                    .child(date),
            )
            .child(
                div()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(ArancelColors::text_primary())
                    .child(item.title.clone()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(ArancelColors::text_primary())
                    .child(item.detail.clone()),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .when(!item.source.trim().is_empty(), |s| {
                        s.child(Badge::amber(item.source.clone()))
                    })
                    .when(!item.url.trim().is_empty(), |s| {
                        s.child(ExternalLink::new(
                            SharedString::from(format!("news-link-{}", item.id)),
                            view_source,
                            item.url.clone(),
                        ))
                    }),
            )
    }
}

impl Render for NewsPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let items: Vec<NewsItem> = self.entities.news.read(cx).items().to_vec();
        let no_date = t(locale, "news-no-date");
        let view_source = t(locale, "news-view-source");

        div()
            .id("news-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_start()
                    .gap_4()
                    // Publishing form
                    .child(
                        div().w(px(340.0)).child(
                            Card::titled(t(locale, "news-publish"))
                                .child(self.date_input.clone())
                                .child(self.title_input.clone())
                                .child(self.detail_input.clone())
                                .child(self.source_input.clone())
                                .child(self.url_input.clone())
                                .child(
                                    Button::primary(
                                        "news-publish-btn",
                                        t(locale, "news-publish-button"),
                                    )
                                    .full_width()
                                    .on_click(cx.listener(
                                        |this, _event: &ClickEvent, _window, cx| {
                                            if this.controller.publish(cx) {
                                                this.clear_form(cx);
                                            }
                                        },
                                    )),
                                ),
                        ),
                    )
                    // Published alerts
                    .child(
                        div().flex_1().child(
                            Card::titled(t(locale, "news-list")).children(items.iter().map(
                                |item| {
                                    self.render_news_item(
                                        item,
                                        no_date.clone(),
                                        view_source.clone(),
                                    )
                                },
                            )),
                        ),
                    ),
            )
    }
}
