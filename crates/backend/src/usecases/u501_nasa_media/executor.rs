use anyhow::Result;
use contracts::usecases::u501_nasa_media::response::{
    EventSummary, EventTeaser, Events, HomeEvents,
};

use super::media_select::MediaKind;
use super::svs_api_client::{SvsApiClient, SvsVisualization};

// SVS visualizations featured on the site
pub const WILDFIRE_SMOKE: u32 = 12325;
pub const SEA_ICE: u32 = 3912;
pub const HURRICANE_SEASON: u32 = 40483;
pub const HURRICANE_TRACKS: u32 = 14368;
pub const EARTHQUAKES: u32 = 2893;

/// Home page teasers. All four visualizations must load.
pub async fn fetch_home_events(client: &SvsApiClient) -> Result<HomeEvents> {
    let (v1, v2, v3, v4) = tokio::try_join!(
        client.fetch_visualization(WILDFIRE_SMOKE),
        client.fetch_visualization(SEA_ICE),
        client.fetch_visualization(HURRICANE_SEASON),
        client.fetch_visualization(EARTHQUAKES),
    )?;
    Ok(HomeEvents {
        nasa1: teaser(&v1),
        nasa2: teaser(&v2),
        nasa3: teaser(&v3),
        nasa4: teaser(&v4),
    })
}

/// Events page cards. All five visualizations must load.
pub async fn fetch_events(client: &SvsApiClient) -> Result<Events> {
    let (smoke, season, tracks, ice, quakes) = tokio::try_join!(
        client.fetch_visualization(WILDFIRE_SMOKE),
        client.fetch_visualization(HURRICANE_SEASON),
        client.fetch_visualization(HURRICANE_TRACKS),
        client.fetch_visualization(SEA_ICE),
        client.fetch_visualization(EARTHQUAKES),
    )?;
    Ok(assemble_events(&smoke, &season, &tracks, &ice, &quakes))
}

pub fn teaser(v: &SvsVisualization) -> EventTeaser {
    EventTeaser {
        title: v.title.clone(),
        description: first_two_sentences(&v.description),
    }
}

/// First two ". "-separated sentences, ending in exactly one period.
pub fn first_two_sentences(text: &str) -> String {
    let mut summary = text.split(". ").take(2).collect::<Vec<_>>().join(". ");
    if !summary.ends_with('.') {
        summary.push('.');
    }
    summary
}

pub fn assemble_events(
    smoke: &SvsVisualization,
    season: &SvsVisualization,
    tracks: &SvsVisualization,
    ice: &SvsVisualization,
    quakes: &SvsVisualization,
) -> Events {
    let event1 = {
        let (video1, video1_text) = pick(smoke, MediaKind::Video, 0);
        let (video2, video2_text) = pick(smoke, MediaKind::Video, 1);
        EventSummary {
            mediagroup: smoke.first_group_description(),
            video1,
            video1_text,
            video2,
            video2_text,
            ..summary(smoke)
        }
    };

    // Text comes from the season overview, footage from the track visualization
    let event2 = {
        let lead = tracks.nth_media(MediaKind::Video, 0);
        let (video2, video2_text) = pick(tracks, MediaKind::Video, 1);
        EventSummary {
            video1: lead.map(|m| m.url()),
            video1_text: lead.and_then(|m| m.caption()),
            video2,
            video2_text,
            ..summary(season)
        }
    };

    let event3 = {
        let (video1, video1_text) = pick(ice, MediaKind::Video, 0);
        let (video2, video2_text) = pick(ice, MediaKind::Video, 1);
        let (image1, image1_text) = pick(ice, MediaKind::Image, 0);
        EventSummary {
            video1,
            video1_text,
            video2,
            video2_text,
            image1,
            image1_text,
            ..summary(ice)
        }
    };

    let event4 = {
        let (video1, video1_text) = pick(quakes, MediaKind::Video, 0);
        let (image1, image1_text) = pick(quakes, MediaKind::Image, 0);
        let (image2, image2_text) = pick(quakes, MediaKind::Image, 1);
        EventSummary {
            video1,
            video1_text,
            image1,
            image1_text,
            image2,
            image2_text,
            ..summary(quakes)
        }
    };

    Events {
        event1,
        event2,
        event3,
        event4,
    }
}

fn summary(v: &SvsVisualization) -> EventSummary {
    EventSummary {
        title: v.title.clone(),
        description: v.description.clone(),
        ..Default::default()
    }
}

fn pick(v: &SvsVisualization, kind: MediaKind, n: usize) -> (Option<String>, Option<String>) {
    match v.nth_media(kind, n) {
        Some(media) => (Some(media.url()), media.alt_text()),
        None => (None, None),
    }
}
