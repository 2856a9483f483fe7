//! Conversion: wire responses → `Coin` / `CoinDetail`.
//!
//! Both conversions are total. Missing sub-objects fall back to `None` or
//! empty values; nothing here can fail or panic.

use super::wire::{self, CurrencyMap};
use super::{Coin, CoinDetail, CoinLinks, ReposUrl, Roi};
use crate::network::VS_CURRENCY;
use crate::shared::CoinId;
use std::collections::HashMap;

/// Extract the `usd` entry of a currency map, `None` if the map or key is absent.
fn usd<T: Clone>(map: Option<&CurrencyMap<T>>) -> Option<T> {
    map.and_then(|m| m.get(VS_CURRENCY)).cloned().flatten()
}

fn clamp_percentage(value: Option<f64>) -> Option<f64> {
    value
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0))
}

/// A ROI block is only meaningful with both `times` and `percentage`.
fn roi(source: wire::RoiResponse) -> Option<Roi> {
    Some(Roi {
        times: source.times?,
        currency: source.currency.unwrap_or_else(|| VS_CURRENCY.to_string()),
        percentage: source.percentage?,
    })
}

impl From<wire::MarketCoinResponse> for Coin {
    fn from(source: wire::MarketCoinResponse) -> Self {
        Coin {
            id: CoinId::from(source.id),
            symbol: source.symbol,
            name: source.name,
            image: source.image,
            current_price: source.current_price.unwrap_or(0.0),
            market_cap: source.market_cap,
            market_cap_rank: source.market_cap_rank,
            fully_diluted_valuation: source.fully_diluted_valuation,
            total_volume: source.total_volume,
            high_24h: source.high_24h,
            low_24h: source.low_24h,
            price_change_24h: source.price_change_24h,
            price_change_percentage_24h: source.price_change_percentage_24h,
            market_cap_change_24h: source.market_cap_change_24h,
            market_cap_change_percentage_24h: source.market_cap_change_percentage_24h,
            circulating_supply: source.circulating_supply,
            total_supply: source.total_supply,
            max_supply: source.max_supply,
            ath: source.ath,
            atl: source.atl,
            ath_change_percentage: source.ath_change_percentage,
            atl_change_percentage: source.atl_change_percentage,
            ath_date: source.ath_date,
            atl_date: source.atl_date,
            roi: source.roi.and_then(roi),
            last_updated: source.last_updated.unwrap_or_default(),
        }
    }
}

impl From<wire::LinksResponse> for CoinLinks {
    fn from(source: wire::LinksResponse) -> Self {
        let repos = source.repos_url.unwrap_or_default();
        CoinLinks {
            homepage: source.homepage,
            blockchain_site: source.blockchain_site,
            official_forum_url: source.official_forum_url,
            chat_url: source.chat_url,
            announcement_url: source.announcement_url,
            twitter_screen_name: source.twitter_screen_name,
            facebook_username: source.facebook_username,
            bitcointalk_thread_id: source.bitcointalk_thread_id,
            telegram_channel_identifier: source.telegram_channel_identifier,
            subreddit_url: source.subreddit_url,
            repos_url: ReposUrl {
                github: repos.github,
                bitbucket: repos.bitbucket,
            },
        }
    }
}

impl From<wire::CoinDetailResponse> for CoinDetail {
    fn from(source: wire::CoinDetailResponse) -> Self {
        let md = source.market_data.unwrap_or_default();
        let image = source
            .image
            .and_then(|img| img.large.or(img.small).or(img.thumb))
            .unwrap_or_default();
        let last_updated = source
            .last_updated
            .or(md.last_updated.clone())
            .unwrap_or_default();

        let coin = Coin {
            id: CoinId::from(source.id),
            symbol: source.symbol,
            name: source.name,
            image,
            // Absent price is 0, unlike every other numeric field.
            current_price: usd(md.current_price.as_ref()).unwrap_or(0.0),
            market_cap: usd(md.market_cap.as_ref()),
            market_cap_rank: md.market_cap_rank.or(source.market_cap_rank),
            fully_diluted_valuation: usd(md.fully_diluted_valuation.as_ref()),
            total_volume: usd(md.total_volume.as_ref()),
            high_24h: usd(md.high_24h.as_ref()),
            low_24h: usd(md.low_24h.as_ref()),
            price_change_24h: md.price_change_24h,
            price_change_percentage_24h: md.price_change_percentage_24h,
            market_cap_change_24h: md
                .market_cap_change_24h
                .as_ref()
                .and_then(|v| v.in_currency(VS_CURRENCY)),
            market_cap_change_percentage_24h: md.market_cap_change_percentage_24h,
            circulating_supply: md.circulating_supply,
            total_supply: md.total_supply,
            max_supply: md.max_supply,
            ath: usd(md.ath.as_ref()),
            atl: usd(md.atl.as_ref()),
            ath_change_percentage: usd(md.ath_change_percentage.as_ref()),
            atl_change_percentage: usd(md.atl_change_percentage.as_ref()),
            ath_date: usd(md.ath_date.as_ref()),
            atl_date: usd(md.atl_date.as_ref()),
            roi: source.roi.and_then(roi),
            last_updated,
        };

        CoinDetail {
            coin,
            description: source
                .description
                .and_then(|d| d.en)
                .unwrap_or_default(),
            links: source.links.map(CoinLinks::from).unwrap_or_default(),
            categories: source.categories,
            sentiment_votes_up_percentage: clamp_percentage(source.sentiment_votes_up_percentage),
            sentiment_votes_down_percentage: clamp_percentage(
                source.sentiment_votes_down_percentage,
            ),
        }
    }
}

/// Flatten `/simple/price` into `usd` prices. Coins without a `usd` quote are dropped.
pub(crate) fn usd_prices(source: wire::SimplePriceResponse) -> HashMap<CoinId, f64> {
    source
        .into_iter()
        .filter_map(|(id, quotes)| usd(Some(&quotes)).map(|price| (CoinId::from(id), price)))
        .collect()
}
