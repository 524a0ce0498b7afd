//! Builds filtered, optionally paginated cake queries. The caller chooses the
//! base selection: the whole catalog, or the cakes related to one bakery
//! through the join table.

use models::cake;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, PaginatorTrait, QueryFilter, Select};
use serde::Serialize;

use crate::{errors::ServiceError, pagination::PageRequest};

/// Request filters for cake listings. Filters are conjunctive.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CakeFilter {
    /// case-insensitive substring match on flavor
    pub flavor: Option<String>,
    /// inclusive upper bound on price
    pub max_price: Option<f64>,
    /// present only when both page and limit were supplied
    pub page: Option<PageRequest>,
}

/// The two response shapes of the list endpoints: a flat array when no
/// pagination was requested, a page envelope when it was. Both shapes are
/// kept for wire compatibility.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CakeListing {
    All(Vec<cake::Model>),
    Page(CakePage),
}

#[derive(Debug, Serialize)]
pub struct CakePage {
    pub cakes: Vec<cake::Model>,
    pub total_pages: u64,
    pub total_items: u64,
    pub current_page: u64,
}

fn apply_filters(mut select: Select<cake::Entity>, filter: &CakeFilter) -> Select<cake::Entity> {
    // An empty flavor string means no filter
    if let Some(flavor) = filter.flavor.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", flavor.to_lowercase());
        select = select.filter(
            Expr::expr(Func::lower(Expr::col((cake::Entity, cake::Column::Flavor)))).like(pattern),
        );
    }
    if let Some(max_price) = filter.max_price {
        select = select.filter(cake::Column::Price.lte(max_price));
    }
    select
}

pub async fn run(
    db: &DatabaseConnection,
    select: Select<cake::Entity>,
    filter: &CakeFilter,
) -> Result<CakeListing, ServiceError> {
    let select = apply_filters(select, filter);
    match filter.page {
        Some(page) => {
            let paginator = select.paginate(db, page.limit);
            let totals = paginator.num_items_and_pages().await?;
            let cakes = paginator.fetch_page(page.zero_based()).await?;
            Ok(CakeListing::Page(CakePage {
                cakes,
                total_pages: totals.number_of_pages,
                total_items: totals.number_of_items,
                current_page: page.page,
            }))
        }
        None => Ok(CakeListing::All(select.all(db).await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_cake};
    use sea_orm::EntityTrait;

    fn filter(flavor: Option<&str>, max_price: Option<f64>, page: Option<(u64, u64)>) -> CakeFilter {
        CakeFilter {
            flavor: flavor.map(str::to_string),
            max_price,
            page: page.map(|(p, l)| PageRequest::new(p, l)),
        }
    }

    async fn run_all(
        db: &sea_orm::DatabaseConnection,
        f: &CakeFilter,
    ) -> Result<CakeListing, ServiceError> {
        run(db, cake::Entity::find(), f).await
    }

    #[tokio::test]
    async fn flavor_filter_is_case_insensitive_substring() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_cake(&db, "Devil's Food", "Dark Chocolate", 20.0).await?;
        seed_cake(&db, "Sponge", "Vanilla", 10.0).await?;

        let listing = run_all(&db, &filter(Some("choc"), None, None)).await?;
        match listing {
            CakeListing::All(cakes) => {
                assert_eq!(cakes.len(), 1);
                assert_eq!(cakes[0].flavor, "Dark Chocolate");
            }
            CakeListing::Page(_) => panic!("expected flat listing"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn max_price_is_inclusive() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_cake(&db, "Cheap", "Vanilla", 10.0).await?;
        seed_cake(&db, "Exact", "Vanilla", 15.0).await?;
        seed_cake(&db, "Pricey", "Vanilla", 15.01).await?;

        let listing = run_all(&db, &filter(None, Some(15.0), None)).await?;
        match listing {
            CakeListing::All(cakes) => {
                assert_eq!(cakes.len(), 2);
                assert!(cakes.iter().any(|c| c.price == 15.0));
            }
            CakeListing::Page(_) => panic!("expected flat listing"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn pagination_reports_totals() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for i in 0..18 {
            seed_cake(&db, &format!("Cake {i}"), "Vanilla", 10.0 + i as f64).await?;
        }

        let listing = run_all(&db, &filter(None, None, Some((1, 10)))).await?;
        let page = match listing {
            CakeListing::Page(p) => p,
            CakeListing::All(_) => panic!("expected page envelope"),
        };
        assert_eq!(page.cakes.len(), 10);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 18);
        assert_eq!(page.current_page, 1);

        let listing = run_all(&db, &filter(None, None, Some((2, 10)))).await?;
        match listing {
            CakeListing::Page(p) => assert_eq!(p.cakes.len(), 8),
            CakeListing::All(_) => panic!("expected page envelope"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty_not_an_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_cake(&db, "Only", "Vanilla", 10.0).await?;

        let listing = run_all(&db, &filter(None, None, Some((9, 10)))).await?;
        match listing {
            CakeListing::Page(p) => {
                assert!(p.cakes.is_empty());
                assert_eq!(p.total_items, 1);
                assert_eq!(p.total_pages, 1);
                assert_eq!(p.current_page, 9);
            }
            CakeListing::All(_) => panic!("expected page envelope"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn filters_are_conjunctive() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_cake(&db, "A", "Chocolate", 30.0).await?;
        seed_cake(&db, "B", "Chocolate", 10.0).await?;
        seed_cake(&db, "C", "Vanilla", 10.0).await?;

        let listing = run_all(&db, &filter(Some("chocolate"), Some(15.0), None)).await?;
        match listing {
            CakeListing::All(cakes) => {
                assert_eq!(cakes.len(), 1);
                assert_eq!(cakes[0].name, "B");
            }
            CakeListing::Page(_) => panic!("expected flat listing"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn flat_listing_serializes_as_array() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_cake(&db, "Only", "Vanilla", 10.0).await?;
        let listing = run_all(&db, &CakeFilter::default()).await?;
        let json = serde_json::to_value(&listing)?;
        assert!(json.is_array());
        Ok(())
    }
}
