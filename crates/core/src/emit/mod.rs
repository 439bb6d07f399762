//! Emitters: render one origin's merged record set into the exact target
//! file formats. All sorting for byte-stable output happens here.

mod access;
mod properties;
mod proxy;
mod resource;

pub use access::render_access_config;
pub use properties::{ARG_SEPARATOR, render_native_image_properties};
pub use proxy::render_proxy_config;
pub use resource::render_resource_config;
