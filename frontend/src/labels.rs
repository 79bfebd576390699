//! Static UI strings, selected by locale the same way the content fields are.

use common::locale::Locale;

use crate::services::sections::SectionKind;

pub fn brand() -> &'static str {
    "Mum Markası"
}

pub fn loading(locale: Locale) -> &'static str {
    locale.pick("Yükleniyor...", "Loading...")
}

pub fn not_found(locale: Locale) -> &'static str {
    locale.pick("Sayfa bulunamadı", "Page not found")
}

pub fn welcome(locale: Locale) -> &'static str {
    locale.pick("Hoşgeldiniz!", "Welcome!")
}

pub fn section_title(kind: SectionKind, locale: Locale) -> &'static str {
    match kind {
        SectionKind::About => locale.pick("Hakkımızda", "About Us"),
        SectionKind::Mission => locale.pick("Misyon", "Mission"),
        SectionKind::Vision => locale.pick("Vizyon", "Vision"),
    }
}

pub fn nav_about(locale: Locale) -> &'static str {
    locale.pick("Hakkımızda", "About")
}

pub fn nav_mission(locale: Locale) -> &'static str {
    locale.pick("Misyon", "Mission")
}

pub fn nav_vision(locale: Locale) -> &'static str {
    locale.pick("Vizyon", "Vision")
}

pub fn nav_products(locale: Locale) -> &'static str {
    locale.pick("Ürünlerimiz", "Products")
}

pub fn nav_contact(locale: Locale) -> &'static str {
    locale.pick("İletişim", "Contact")
}

pub fn all_categories(locale: Locale) -> &'static str {
    locale.pick("Hepsi", "All")
}

pub fn contact_title(locale: Locale) -> &'static str {
    locale.pick("İletişim", "Contact Us")
}

pub fn field_name(locale: Locale) -> &'static str {
    locale.pick("İsim", "Name")
}

pub fn field_email(locale: Locale) -> &'static str {
    locale.pick("E-posta", "Email")
}

pub fn field_phone(locale: Locale) -> &'static str {
    locale.pick("Telefon", "Phone")
}

pub fn field_message(locale: Locale) -> &'static str {
    locale.pick("Mesaj", "Message")
}

pub fn send(locale: Locale) -> &'static str {
    locale.pick("Gönder", "Send")
}

pub fn sending(locale: Locale) -> &'static str {
    locale.pick("Gönderiliyor...", "Sending...")
}

pub fn message_sent(locale: Locale) -> &'static str {
    locale.pick("Mesajınız başarıyla gönderildi!", "Your message has been sent!")
}

pub fn generic_error(locale: Locale) -> &'static str {
    locale.pick("Bir hata oluştu", "An error occurred")
}

pub fn copyright(locale: Locale) -> &'static str {
    locale.pick(
        "© 2025 Mum Markası. Tüm hakları saklıdır.",
        "© 2025 Mum Markası. All rights reserved.",
    )
}

pub fn footer_privacy(locale: Locale) -> &'static str {
    locale.pick("Gizlilik Politikası", "Privacy Policy")
}

pub fn footer_terms(locale: Locale) -> &'static str {
    locale.pick("Kullanım Şartları", "Terms of Use")
}

pub fn footer_sitemap(locale: Locale) -> &'static str {
    locale.pick("Site Haritası", "Sitemap")
}
