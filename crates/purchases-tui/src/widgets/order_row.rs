//! A single order in the list: header, details toggle, and line items when expanded

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use purchases_core::{DisplayFormat, LineItem, Order};

use crate::theme::{icons::IconSet, styles};

/// Width reserved for item names so quantities and prices line up
const ITEM_NAME_WIDTH: usize = 28;

pub struct OrderRow<'a> {
    order: &'a Order,
    format: &'a DisplayFormat,
    icons: IconSet,
    expanded: bool,
    selected: bool,
    show_images: bool,
}

impl<'a> OrderRow<'a> {
    pub fn new(order: &'a Order, format: &'a DisplayFormat, icons: IconSet) -> Self {
        Self {
            order,
            format,
            icons,
            expanded: false,
            selected: false,
            show_images: true,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_images(mut self, show: bool) -> Self {
        self.show_images = show;
        self
    }

    /// Rows this order occupies for the current expansion
    pub fn height(&self) -> u16 {
        let details = if self.expanded {
            self.order.items.len().max(1)
        } else {
            0
        };
        (2 + details) as u16
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(self.height() as usize);
        lines.push(self.header_line());
        lines.push(self.toggle_line());

        if self.expanded {
            let order = self.order;
            if order.items.is_empty() {
                lines.push(Line::from(Span::styled("      (no items)", styles::text_muted())));
            }
            for item in &order.items {
                lines.push(self.item_line(item));
            }
        }

        lines
    }

    fn header_line(&self) -> Line<'a> {
        let (badge_icon, badge_style) = styles::status_badge(self.order.status, &self.icons);
        let marker = if self.selected { "▌" } else { " " };

        Line::from(vec![
            Span::styled(marker, styles::accent_bold()),
            Span::raw(" "),
            Span::styled(
                format!("Order #{}", self.order.order_number),
                styles::text_primary().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.format.date(self.order.date), styles::text_secondary()),
            Span::raw("  "),
            Span::styled(
                format!("{} {}", badge_icon, self.order.status.label()),
                badge_style,
            ),
            Span::raw("  "),
            Span::styled(self.format.money(self.order.total), styles::amount()),
        ])
    }

    fn toggle_line(&self) -> Line<'a> {
        let (chevron, label) = if self.expanded {
            (self.icons.chevron_down(), "Hide details")
        } else {
            (self.icons.chevron_right(), "Show details")
        };

        let style = if self.selected {
            styles::accent()
        } else {
            styles::text_muted()
        };

        Line::from(vec![
            Span::raw("   "),
            Span::styled(format!("{} {}", chevron, label), style),
        ])
    }

    fn item_line(&self, item: &'a LineItem) -> Line<'a> {
        let mut spans = vec![Span::raw("      ")];

        if self.show_images {
            spans.push(Span::styled(
                format!("{} {} ", self.icons.image(), image_name(&item.image)),
                styles::text_muted(),
            ));
        }

        let pad = ITEM_NAME_WIDTH.saturating_sub(item.name.width());
        spans.push(Span::styled(item.name.as_str(), styles::text_primary()));
        spans.push(Span::raw(" ".repeat(pad + 1)));
        spans.push(Span::styled(
            format!("x{}", item.quantity),
            styles::text_secondary(),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            self.format.money(item.unit_price),
            styles::text_secondary(),
        ));

        Line::from(spans)
    }
}

/// Last path segment of an image reference, or the whole reference
fn image_name(image: &str) -> &str {
    image
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(image)
}

impl Widget for OrderRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.selected {
            styles::selected_row()
        } else {
            Style::default()
        };
        Paragraph::new(self.lines()).style(style).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use purchases_app::config::IconMode;
    use purchases_core::{OrderCatalog, OrderId, OrderSource};

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn sample_order(id: u32) -> Order {
        OrderCatalog::sample()
            .expect("sample catalog")
            .orders()
            .iter()
            .find(|order| order.id == OrderId(id))
            .cloned()
            .expect("sample order")
    }

    fn render(row: OrderRow<'_>) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 6);
        term.render_widget(row, term.area());
        term
    }

    #[test]
    fn test_collapsed_header_and_toggle() {
        let order = sample_order(1);
        let format = DisplayFormat::default();
        let term = render(OrderRow::new(&order, &format, icons()));

        assert!(term.line_contains(0, "Order #ORD-2024-001"));
        assert!(term.line_contains(0, "January 15, 2024"));
        assert!(term.line_contains(0, "✓ Liquidado"));
        assert!(term.line_contains(0, "$159.99"));
        assert!(term.line_contains(1, "Show details"));
        assert!(!term.buffer_contains("Silla ergonómica"));
    }

    #[test]
    fn test_expanded_lists_items_in_order() {
        let order = sample_order(1);
        let format = DisplayFormat::default();
        let term = render(OrderRow::new(&order, &format, icons()).expanded(true));

        assert!(term.line_contains(1, "Hide details"));
        assert!(term.line_contains(2, "Silla ergonómica"));
        assert!(term.line_contains(2, "x1"));
        assert!(term.line_contains(2, "$129.99"));
        assert!(term.line_contains(3, "Cojín lumbar"));
        assert!(term.line_contains(3, "$30.00"));
    }

    #[test]
    fn test_quantity_and_unit_price_not_extended() {
        let order = sample_order(2);
        let format = DisplayFormat::default();
        let term = render(OrderRow::new(&order, &format, icons()).expanded(true));

        assert!(term.line_contains(2, "x2"));
        assert!(term.line_contains(2, "$19.99"));
        assert!(!term.buffer_contains("$39.98"));
    }

    #[test]
    fn test_image_column_follows_setting() {
        let order = sample_order(3);
        let format = DisplayFormat::default();

        let term = render(OrderRow::new(&order, &format, icons()).expanded(true));
        assert!(term.line_contains(2, "▣"));

        let term = render(
            OrderRow::new(&order, &format, icons())
                .expanded(true)
                .show_images(false),
        );
        assert!(!term.buffer_contains("▣"));
        assert!(term.line_contains(2, "Lámpara de escritorio"));
    }

    #[test]
    fn test_empty_items_render_placeholder() {
        let mut order = sample_order(4);
        order.items.clear();
        let format = DisplayFormat::default();

        let row = OrderRow::new(&order, &format, icons()).expanded(true);
        assert_eq!(row.height(), 3);
        let term = render(row);
        assert!(term.buffer_contains("(no items)"));
        assert!(term.line_contains(0, "✗ Cancelado"));
    }

    #[test]
    fn test_height_tracks_expansion() {
        let order = sample_order(4);
        let format = DisplayFormat::default();

        assert_eq!(OrderRow::new(&order, &format, icons()).height(), 2);
        assert_eq!(
            OrderRow::new(&order, &format, icons())
                .expanded(true)
                .height(),
            4
        );
    }

    #[test]
    fn test_image_name() {
        assert_eq!(
            image_name("https://images.example.com/products/chair.jpg"),
            "chair.jpg"
        );
        assert_eq!(image_name("chair.jpg"), "chair.jpg");
        assert_eq!(image_name("https://x/"), "https://x/");
    }
}
