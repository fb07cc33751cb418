//! Unit tests for the journey query orchestrator.

use super::*;
use crate::domain::{GOOD_SERVICE_MESSAGE, LegMode, StationId};
use crate::stations::{StationCache, StationResolver, StopSearch};
use crate::tfl::{
    Identifier, ItineraryResult, Point, RouteOption, SearchMatch, SearchResponse, TflError,
    TflJourney, TflLeg,
};
use std::sync::Mutex;

/// Mock stop search with a fixed name → matches table.
struct MockSearch {
    stations: Vec<(&'static str, SearchMatch)>,
    call_count: Mutex<usize>,
}

impl MockSearch {
    fn new() -> Self {
        Self {
            stations: Vec::new(),
            call_count: Mutex::new(0),
        }
    }

    fn add_station(&mut self, query: &'static str, id: &str) {
        self.stations.push((
            query,
            SearchMatch {
                id: Some(id.to_string()),
                modes: vec!["tube".to_string()],
                stop_type: Some("NaptanMetroStation".to_string()),
                ..Default::default()
            },
        ));
    }

    fn api_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl StopSearch for &MockSearch {
    async fn search_stops(
        &self,
        query: &str,
        _mode: &str,
        _max_results: u8,
    ) -> Result<SearchResponse, TflError> {
        *self.call_count.lock().unwrap() += 1;
        let matches = self
            .stations
            .iter()
            .filter(|(q, _)| q.eq_ignore_ascii_case(query.trim()))
            .map(|(_, m)| m.clone())
            .collect();
        Ok(SearchResponse {
            matches,
            ..Default::default()
        })
    }
}

/// What the mock planner answers with.
enum Answer {
    Journeys(Vec<TflJourney>),
    Status(u16),
    Malformed,
}

/// Mock journey planner recording each call.
struct MockPlanner {
    answer: Answer,
    calls: Mutex<Vec<(String, String, Vec<String>)>>,
}

impl MockPlanner {
    fn answering(answer: Answer) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn api_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl JourneyPlanner for &MockPlanner {
    async fn plan(
        &self,
        from: &StationId,
        to: &StationId,
        modes: &[String],
    ) -> Result<ItineraryResult, TflError> {
        self.calls.lock().unwrap().push((
            from.as_str().to_string(),
            to.as_str().to_string(),
            modes.to_vec(),
        ));

        match &self.answer {
            Answer::Journeys(journeys) => Ok(ItineraryResult {
                journeys: journeys.clone(),
            }),
            Answer::Status(status) => Err(TflError::Api {
                status: *status,
                message: "upstream error".to_string(),
            }),
            Answer::Malformed => Err(TflError::Json {
                message: "expected value at line 1 column 1".to_string(),
                body: Some("<html>".to_string()),
            }),
        }
    }
}

fn make_journey(duration: u32, start: &str, arrive: &str) -> TflJourney {
    let tube = TflLeg {
        duration: Some(duration.saturating_sub(4)),
        mode: Some(Identifier {
            id: Some("tube".into()),
            name: Some("tube".into()),
        }),
        route_options: vec![RouteOption {
            name: Some("Northern".into()),
            directions: vec!["Morden via Bank".into()],
        }],
        departure_point: Some(Point {
            common_name: Some("High Barnet Underground Station".into()),
            naptan_id: None,
        }),
        arrival_point: Some(Point {
            common_name: Some("Chancery Lane Underground Station".into()),
            naptan_id: None,
        }),
        ..Default::default()
    };
    let walk = TflLeg {
        duration: Some(4),
        mode: Some(Identifier {
            id: Some("walking".into()),
            name: Some("walking".into()),
        }),
        distance: Some(310.4),
        ..Default::default()
    };

    TflJourney {
        start_date_time: Some(format!("2024-01-15T{start}:00")),
        arrival_date_time: Some(format!("2024-01-15T{arrive}:00")),
        duration: Some(duration),
        legs: Some(vec![tube, walk]),
    }
}

fn query<'a>(
    search: &'a MockSearch,
    planner: &'a MockPlanner,
) -> JourneyQuery<&'a MockSearch, &'a MockPlanner> {
    let resolver = StationResolver::new(search, StationCache::new());
    JourneyQuery::new(resolver, planner, QueryConfig::default())
}

#[tokio::test]
async fn default_route_resolves_from_seed_table() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Journeys(vec![make_journey(45, "10:00", "10:45")]));

    let journeys = query(&search, &planner)
        .query_journeys("  High Barnet  ", "CHANCERY LANE")
        .await
        .unwrap();

    assert_eq!(journeys.len(), 1);
    assert_eq!(search.api_call_count(), 0);

    let calls = planner.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "940GZZLUHBT");
    assert_eq!(calls[0].1, "940GZZLUCHL");
    assert_eq!(calls[0].2, ["tube", "walking"]);
}

#[tokio::test]
async fn journey_is_normalised() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Journeys(vec![make_journey(45, "10:00", "10:45")]));

    let journeys = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await
        .unwrap();

    let journey = &journeys[0];
    assert_eq!(journey.duration_mins, 45);
    assert_eq!(journey.departure.to_string(), "10:00");
    assert_eq!(journey.arrival.to_string(), "10:45");
    assert!(journey.is_fastest);

    let legs = journey.legs();
    assert_eq!(legs[0].mode(), LegMode::Tube);
    assert_eq!(legs[0].line_name(), Some("Northern"));
    assert_eq!(legs[0].stops(), Some(0));
    assert_eq!(legs[1].mode(), LegMode::Walking);
    assert_eq!(legs[1].distance_m(), Some(310));

    assert_eq!(journey.disruptions().len(), 1);
    assert_eq!(journey.disruptions()[0].message, GOOD_SERVICE_MESSAGE);
}

#[tokio::test]
async fn seven_journeys_truncated_to_five() {
    let search = MockSearch::new();
    // Deliberately not sorted by duration: the first is still "fastest"
    let upstream: Vec<_> = [50, 30, 35, 40, 45, 55, 60]
        .into_iter()
        .map(|d| make_journey(d, "10:00", "11:00"))
        .collect();
    let planner = MockPlanner::answering(Answer::Journeys(upstream));

    let journeys = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await
        .unwrap();

    assert_eq!(journeys.len(), 5);
    assert!(journeys[0].is_fastest);
    assert!(journeys[1..].iter().all(|j| !j.is_fastest));

    let durations: Vec<_> = journeys.iter().map(|j| j.duration_mins).collect();
    assert_eq!(durations, [50, 30, 35, 40, 45]);
}

#[tokio::test]
async fn empty_upstream_is_empty_result() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Journeys(vec![]));

    let journeys = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await
        .unwrap();

    assert!(journeys.is_empty());
    assert_eq!(planner.api_call_count(), 1);
}

#[tokio::test]
async fn unknown_station_skips_planner() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Journeys(vec![make_journey(45, "10:00", "10:45")]));

    let result = query(&search, &planner)
        .query_journeys("Unknown Station", "Chancery Lane")
        .await;

    match result {
        Err(QueryError::StationNotFound { unresolved }) => {
            assert_eq!(unresolved, ["Unknown Station"]);
        }
        other => panic!("expected StationNotFound, got {other:?}"),
    }
    assert_eq!(search.api_call_count(), 1);
    assert_eq!(planner.api_call_count(), 0);
}

#[tokio::test]
async fn both_unknown_reports_both() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Journeys(vec![]));

    let result = query(&search, &planner)
        .query_journeys("Nowhere", "Elsewhere")
        .await;

    match result {
        Err(QueryError::StationNotFound { unresolved }) => {
            assert_eq!(unresolved, ["Nowhere", "Elsewhere"]);
        }
        other => panic!("expected StationNotFound, got {other:?}"),
    }
    assert_eq!(planner.api_call_count(), 0);
}

#[tokio::test]
async fn searched_stations_resolve_once() {
    let mut search = MockSearch::new();
    search.add_station("Baker Street", "940GZZLUBST");
    search.add_station("Angel", "940GZZLUAGL");
    let planner = MockPlanner::answering(Answer::Journeys(vec![make_journey(20, "09:00", "09:20")]));
    let query = query(&search, &planner);

    query.query_journeys("Baker Street", "Angel").await.unwrap();
    query.query_journeys("baker street ", " ANGEL").await.unwrap();

    assert_eq!(search.api_call_count(), 2);
    assert_eq!(planner.api_call_count(), 2);

    let calls = planner.calls.lock().unwrap();
    assert_eq!(calls[1].0, "940GZZLUBST");
    assert_eq!(calls[1].1, "940GZZLUAGL");
}

#[tokio::test]
async fn missing_names_are_invalid_input() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Journeys(vec![]));
    let query = query(&search, &planner);

    for (from, to) in [("", "Angel"), ("Angel", ""), ("   ", "Angel"), ("", "")] {
        let result = query.query_journeys(from, to).await;
        assert!(
            matches!(result, Err(QueryError::InvalidInput(_))),
            "({from:?}, {to:?}) gave {result:?}"
        );
    }

    assert_eq!(search.api_call_count(), 0);
    assert_eq!(planner.api_call_count(), 0);
}

#[tokio::test]
async fn planner_failure_is_upstream_unavailable() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Status(500));

    let result = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await;

    assert!(matches!(
        result,
        Err(QueryError::UpstreamUnavailable(TflError::Api { status: 500, .. }))
    ));
    // No retry
    assert_eq!(planner.api_call_count(), 1);
}

#[tokio::test]
async fn ambiguous_planner_answer_is_upstream_unavailable() {
    // TfL answers 300 Multiple Choices when it cannot disambiguate stops
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Status(300));

    let result = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await;

    assert!(matches!(result, Err(QueryError::UpstreamUnavailable(_))));
}

#[tokio::test]
async fn malformed_planner_body_is_internal() {
    let search = MockSearch::new();
    let planner = MockPlanner::answering(Answer::Malformed);

    let result = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await;

    assert!(matches!(result, Err(QueryError::Internal(_))));
}

#[tokio::test]
async fn malformed_journey_fails_whole_request() {
    let search = MockSearch::new();
    let mut broken = make_journey(30, "10:00", "10:30");
    broken.legs = None;
    let planner = MockPlanner::answering(Answer::Journeys(vec![
        make_journey(25, "10:00", "10:25"),
        broken,
    ]));

    let result = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await;

    assert!(matches!(result, Err(QueryError::Internal(_))));
}

#[tokio::test]
async fn malformed_journey_beyond_limit_is_ignored() {
    let search = MockSearch::new();
    let mut upstream: Vec<_> = (0..5).map(|_| make_journey(30, "10:00", "10:30")).collect();
    let mut broken = make_journey(30, "10:00", "10:30");
    broken.start_date_time = Some("garbage".into());
    upstream.push(broken);
    let planner = MockPlanner::answering(Answer::Journeys(upstream));

    let journeys = query(&search, &planner)
        .query_journeys("High Barnet", "Chancery Lane")
        .await
        .unwrap();

    assert_eq!(journeys.len(), 5);
}

#[test]
fn error_display() {
    let err = QueryError::StationNotFound {
        unresolved: vec!["Nowhere".into(), "Elsewhere".into()],
    };
    assert_eq!(err.to_string(), "could not find station(s): Nowhere, Elsewhere");

    let err = QueryError::InvalidInput("Both 'from' and 'to' parameters are required".into());
    assert_eq!(err.to_string(), "Both 'from' and 'to' parameters are required");

    let err = QueryError::UpstreamUnavailable(TflError::RateLimited);
    assert_eq!(
        err.to_string(),
        "journey planner unavailable: rate limited by TfL API"
    );
}
