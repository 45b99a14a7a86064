// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::persisted_state::SessionState;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::compare;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Space};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a SessionState,
    pub compare: Option<&'a compare::State>,
    /// Whether sources are known so the widget can be (re)mounted.
    pub can_open: bool,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = column![view_header(&ctx)].spacing(spacing::SM);

    if let Some(key) = ctx.notice {
        content = content.push(view_notice(ctx.i18n, key));
    }

    let body: Element<'_, Message> = match ctx.compare {
        Some(state) => state
            .view(compare::ViewEnv { i18n: ctx.i18n })
            .map(Message::Compare),
        None => container(text(ctx.i18n.tr("compare-closed")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into(),
    };

    container(content.push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .into()
}

fn view_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let accent = ctx.compare.map_or(palette::PRIMARY_500, compare::State::accent);

    let safe_search_label = if ctx.session.safe_search {
        i18n.tr("header-safe-search-on")
    } else {
        i18n.tr("header-safe-search-off")
    };
    let sign_in_label = if ctx.session.signed_in {
        i18n.tr("header-sign-out")
    } else {
        i18n.tr("header-sign-in")
    };

    let mut header = row![
        text(i18n.tr("header-title")).size(typography::TITLE_MD),
        Space::new().width(Length::Fill),
    ]
    .spacing(spacing::XS)
    .align_y(alignment::Vertical::Center);

    if ctx.session.signed_in {
        header = header.push(text(i18n.tr("header-signed-in")).size(typography::CAPTION));
    }

    let compare_toggle = if ctx.compare.is_some() {
        header_button(i18n.tr("header-close-compare"), accent, false)
            .on_press(Message::CloseCompare)
    } else {
        let open = header_button(i18n.tr("header-open-compare"), accent, false);
        if ctx.can_open {
            open.on_press(Message::OpenCompare)
        } else {
            open
        }
    };

    header = header
        .push(
            header_button(safe_search_label, accent, ctx.session.safe_search)
                .on_press(Message::ToggleSafeSearch),
        )
        .push(
            header_button(sign_in_label, accent, ctx.session.signed_in)
                .on_press(Message::ToggleSignedIn),
        )
        .push(compare_toggle)
        .push(
            header_button(
                i18n.tr_with_args(
                    "header-language",
                    &[("locale", &i18n.current_locale().to_string())],
                ),
                accent,
                false,
            )
            .on_press(Message::CycleLanguage),
        );

    container(header)
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::bar)
        .into()
}

fn header_button<'a>(
    label: String,
    accent: iced::Color,
    active: bool,
) -> iced::widget::Button<'a, Message> {
    button(text(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::toolbar(accent, active))
}

fn view_notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let notice = row![
        text(i18n.tr(key))
            .size(typography::BODY)
            .color(palette::WARNING_500),
        Space::new().width(Length::Fill),
        button(text(i18n.tr("notification-dismiss")).size(typography::CAPTION))
            .on_press(Message::DismissNotice)
            .padding([spacing::XXS, spacing::XS]),
    ]
    .align_y(alignment::Vertical::Center);

    container(notice)
        .padding([spacing::XS, spacing::SM])
        .style(styles::container::bar)
        .into()
}
