pub mod site;

pub use site::{ Experience, Project, Section, SiteConfig, SocialLink, Testimonial };
