// Resume upload: multipart PDF in, plain text out.

pub mod extract;
pub mod handlers;
