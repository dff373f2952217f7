pub mod category;
pub mod product;
pub mod sub_category;
pub mod wishlist;

pub use category::{Category, CategoryDto, CategoryRef};
pub use product::{Pagination, Product, ProductDto, ProductPage, ProductQuery, Variant};
pub use sub_category::{SubCategory, SubCategoryDto, SubCategoryRef};
pub use wishlist::{AddWishlistRequest, WishlistResponse};
