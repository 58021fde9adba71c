pub mod badges;
pub mod cards;
pub mod composer;
pub mod figure;
pub mod histogram;
pub mod html;
pub mod page;
pub mod plot;
pub mod width;
