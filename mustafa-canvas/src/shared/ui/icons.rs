pub(crate) const MENU: &[u8] =
    include_bytes!("../../../../assets/svg/menu.svg");
pub(crate) const CLOSE: &[u8] =
    include_bytes!("../../../../assets/svg/close.svg");
pub(crate) const MAIL: &[u8] =
    include_bytes!("../../../../assets/svg/mail.svg");
pub(crate) const PHONE: &[u8] =
    include_bytes!("../../../../assets/svg/phone.svg");
pub(crate) const MAP_PIN: &[u8] =
    include_bytes!("../../../../assets/svg/map-pin.svg");
pub(crate) const CHEVRON_RIGHT: &[u8] =
    include_bytes!("../../../../assets/svg/chevron-right.svg");
pub(crate) const IMAGE: &[u8] =
    include_bytes!("../../../../assets/svg/image.svg");
pub(crate) const INSTAGRAM: &[u8] =
    include_bytes!("../../../../assets/svg/instagram.svg");
pub(crate) const FACEBOOK: &[u8] =
    include_bytes!("../../../../assets/svg/facebook.svg");
pub(crate) const PINTEREST: &[u8] =
    include_bytes!("../../../../assets/svg/pinterest.svg");

/// Icon for a social profile name, if one ships with the app.
pub(crate) fn social(name: &str) -> Option<&'static [u8]> {
    match name {
        "Instagram" => Some(INSTAGRAM),
        "Facebook" => Some(FACEBOOK),
        "Pinterest" => Some(PINTEREST),
        _ => None,
    }
}
