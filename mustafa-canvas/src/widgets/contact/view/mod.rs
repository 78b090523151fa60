pub(crate) mod inquiry_form;
