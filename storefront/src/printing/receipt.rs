//! Sale receipt (cupom) rendering
//!
//! Fixed-width plain text, one `\n`-terminated line per row. Widths count
//! characters, so accented Portuguese text lines up.

use crate::utils::money::{self, format_amount};
use shared::models::{Sale, StoreInfo};
use shared::util::format_receipt_date;

/// Narrowest width the layout still makes sense at
const MIN_WIDTH: usize = 24;

fn char_width(s: &str) -> usize {
    s.chars().count()
}

/// Greedy word wrap to `max` characters per line
///
/// Runs of whitespace collapse to one space. A word longer than `max` is
/// split across lines. Always returns at least one (possibly empty) line.
fn wrap(s: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in s.split_whitespace() {
        let mut word = word;
        while char_width(word) > max {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let split = word.char_indices().nth(max).map_or(word.len(), |(i, _)| i);
            lines.push(word[..split].to_string());
            word = &word[split..];
        }
        if word.is_empty() {
            continue;
        }
        if !current.is_empty() {
            if char_width(&current) + 1 + char_width(word) > max {
                lines.push(std::mem::take(&mut current));
            } else {
                current.push(' ');
            }
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Fluent plain-text receipt builder
///
/// Text wider than the paper wraps onto extra lines; nothing is cut off.
pub struct ReceiptBuilder {
    buf: String,
    width: usize,
}

impl ReceiptBuilder {
    /// Create a builder for the given paper width in characters
    ///
    /// Common widths: 32 (58mm paper), 42 or 48 (80mm paper).
    pub fn new(width: usize) -> Self {
        Self {
            buf: String::with_capacity(1024),
            width: width.max(MIN_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn push_line(&mut self, s: &str) -> &mut Self {
        self.buf.push_str(s);
        self.buf.push('\n');
        self
    }

    /// Left-aligned text, wrapped at the paper width
    pub fn line(&mut self, s: &str) -> &mut Self {
        for row in wrap(s, self.width) {
            self.push_line(&row);
        }
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Centered text, each wrapped row centered on its own
    pub fn center(&mut self, s: &str) -> &mut Self {
        for row in wrap(s, self.width) {
            let pad = (self.width - char_width(&row)) / 2;
            let line = format!("{}{}", " ".repeat(pad), row);
            self.push_line(&line);
        }
        self
    }

    /// Right-aligned text
    pub fn right(&mut self, s: &str) -> &mut Self {
        for row in wrap(s, self.width) {
            let line = format!("{:>width$}", row, width = self.width);
            self.push_line(&line);
        }
        self
    }

    /// Print a line of '-' characters
    pub fn sep_dashed(&mut self) -> &mut Self {
        let sep = "-".repeat(self.width);
        self.push_line(&sep)
    }

    /// Print a line of '=' characters
    pub fn sep_double(&mut self) -> &mut Self {
        let sep = "=".repeat(self.width);
        self.push_line(&sep)
    }

    /// Left and right text on the same line, spaces filling the gap
    ///
    /// A long left side wraps upward so the right value (usually an amount)
    /// sits on its last row. When the right value alone fills the paper it
    /// gets its own right-aligned rows below the left text.
    pub fn line_lr(&mut self, left: &str, right: &str) -> &mut Self {
        let rw = char_width(right);
        if rw + 1 >= self.width {
            self.line(left);
            return self.right(right);
        }
        let mut rows = wrap(left, self.width - rw - 1);
        let last = rows.pop().unwrap_or_default();
        for row in rows {
            self.push_line(&row);
        }
        let spaces = self.width - char_width(&last) - rw;
        let line = format!("{}{}{}", last, " ".repeat(spaces), right);
        self.push_line(&line)
    }

    pub fn build(self) -> String {
        self.buf
    }
}

/// Render the receipt for a finalized sale
pub fn render(sale: &Sale, store: &StoreInfo, width: usize) -> String {
    let mut b = ReceiptBuilder::new(width);

    // Header
    b.center(&store.name.to_uppercase())
        .center(&store.address)
        .center(&format!("CNPJ: {}", store.cnpj))
        .sep_dashed();

    b.line_lr("Data:", &format_receipt_date(&sale.date))
        .line_lr("Venda Nº:", &sale.id.to_string())
        .line_lr("Vendedor:", sale.seller_name.as_deref().unwrap_or("-"))
        .sep_dashed();

    // Customer
    b.line("Cliente");
    b.line(&format!("Nome: {}", sale.customer_name.as_deref().unwrap_or("")));
    if let Some(cpf) = sale.customer_cpf.as_deref().filter(|c| !c.is_empty()) {
        b.line(&format!("CPF: {}", cpf));
    }
    b.sep_dashed();

    // Items
    b.line_lr("Qtd Item", "Valor");
    for item in &sale.items {
        let value = money::to_f64(money::line_total(item));
        b.line_lr(
            &format!("{}x {}", item.quantity, item.product.title),
            &format_amount(value),
        );
    }
    b.sep_dashed();

    // Totals
    b.line_lr("TOTAL", &format!("R$ {}", format_amount(sale.total)))
        .right(&format!("Pagamento: {}", sale.payment_method))
        .newline();

    // Footer
    b.center("Obrigado pela preferência!")
        .center("Trocas somente com este cupom em até 7 dias.");

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CartItem, Product};

    fn create_test_sale(customer_cpf: Option<&str>) -> Sale {
        let item = CartItem {
            product: Product {
                id: 3,
                title: "AirPods Pro 2ª Geração".to_string(),
                price: 1899.0,
                original_price: Some(2299.0),
                image: String::new(),
                category: "Acessórios".to_string(),
                is_new: None,
            },
            quantity: 2,
        };
        Sale {
            id: 1709647629123,
            seller_id: Some("1".to_string()),
            seller_name: Some("Vendedor 1".to_string()),
            total: 3798.0,
            date: "2024-03-05T14:07:09.123Z".to_string(),
            items: vec![item],
            customer_name: Some("Consumidor Final".to_string()),
            customer_cpf: customer_cpf.map(str::to_string),
            payment_method: "Pix".to_string(),
        }
    }

    #[test]
    fn test_receipt_contents() {
        let text = render(&create_test_sale(None), &StoreInfo::default(), 42);

        assert!(text.contains("TECHCASE PRO"));
        assert!(text.contains("CNPJ: 00.000.000/0001-00"));
        assert!(text.contains("05/03/2024 14:07:09"));
        assert!(text.contains("1709647629123"));
        assert!(text.contains("Vendedor 1"));
        assert!(text.contains("Nome: Consumidor Final"));
        assert!(text.contains("2x AirPods Pro"));
        assert!(text.contains("3798.00"));
        assert!(text.contains("R$ 3798.00"));
        assert!(text.contains("Pagamento: Pix"));
        assert!(text.contains("Obrigado pela preferência!"));
        assert!(!text.contains("CPF:"));
    }

    #[test]
    fn test_cpf_line_only_when_present() {
        let text = render(
            &create_test_sale(Some("123.456.789-00")),
            &StoreInfo::default(),
            42,
        );
        assert!(text.contains("CPF: 123.456.789-00"));

        let text = render(&create_test_sale(Some("")), &StoreInfo::default(), 42);
        assert!(!text.contains("CPF:"));
    }

    /// Receipt text with line breaks and padding collapsed
    fn flowed(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn assert_fits(text: &str, width: usize) {
        for line in text.lines() {
            assert!(line.chars().count() <= width, "overflow: {:?}", line);
        }
    }

    #[test]
    fn test_lines_fit_width() {
        let text = render(&create_test_sale(None), &StoreInfo::default(), 32);
        assert_fits(&text, 32);
    }

    #[test]
    fn test_footer_wraps_at_default_width() {
        let text = render(&create_test_sale(None), &StoreInfo::default(), 42);
        assert_fits(&text, 42);
        assert!(flowed(&text).contains("Trocas somente com este cupom em até 7 dias."));
        assert!(text.lines().any(|l| l.trim() == "dias."));
    }

    #[test]
    fn test_long_customer_name_and_title_wrap() {
        let name = "Maria Aparecida dos Santos Oliveira Pereira da Silva";
        let title = "Capa MagSafe Leather Premium Edição Limitada Azul Marinho";
        let mut sale = create_test_sale(Some("123.456.789-00"));
        sale.customer_name = Some(name.to_string());
        sale.items[0].product.title = title.to_string();

        for width in [32, 42, 48] {
            let text = render(&sale, &StoreInfo::default(), width);
            assert_fits(&text, width);
            let flowed = flowed(&text);
            assert!(flowed.contains(&format!("Nome: {}", name)));
            assert!(flowed.contains(&format!("2x {} 3798.00", title)));
        }
    }

    #[test]
    fn test_line_lr_keeps_amount() {
        let mut b = ReceiptBuilder::new(24);
        b.line_lr("1x Capa MagSafe Leather Premium", "399.00");
        let out = b.build();
        assert_fits(&out, 24);

        let last = out.lines().last().unwrap();
        assert_eq!(last.chars().count(), 24);
        assert!(last.ends_with("399.00"));
        assert_eq!(flowed(&out), "1x Capa MagSafe Leather Premium 399.00");
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("a  b", 10), vec!["a b"]);
    }
}
