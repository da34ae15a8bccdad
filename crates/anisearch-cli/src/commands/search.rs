use crate::bootstrap::AppBootstrap;

pub async fn set(app: &AppBootstrap, ids: Vec<i64>, keyword: String, sort: String) {
    app.search.set_search_results(ids, keyword, sort).await;
    show(app);
}

pub async fn clear(app: &AppBootstrap) {
    app.search.clear_search_results().await;
    println!("Search results cleared");
}

pub fn show(app: &AppBootstrap) {
    let snapshot = app.search.snapshot();
    if snapshot.is_cleared() {
        println!("No cached search");
        return;
    }

    let ids: Vec<String> = snapshot.result_ids.iter().map(i64::to_string).collect();
    println!("keyword: {:?}", snapshot.keyword);
    println!("sort:    {}", snapshot.sort_method);
    println!("results: [{}]", ids.join(", "));
}
