use super::*;
use crate::config::Config;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run() -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let bind = config.server.bind.clone();
        let state = web::Data::new(Host::from(config));
        log::info!("starting training host on {}", bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .configure(Self::routes)
        })
        .workers(4)
        .bind(bind)?
        .run()
        .await?;
        Ok(())
    }

    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::resource("/train")
                .route(web::get().to(train))
                .default_service(web::to(not_allowed)),
        )
        .route("/ai-move", web::get().to(ai_move))
        .route("/recommend", web::post().to(recommend));
    }
}

async fn train(host: web::Data<Host>) -> impl Responder {
    match host.train().await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            log::error!("training failed: {:#}", e);
            HttpResponse::InternalServerError().json(Failure::from(e.to_string().as_str()))
        }
    }
}

async fn not_allowed() -> impl Responder {
    HttpResponse::MethodNotAllowed().json(Failure::from("Method not allowed"))
}

async fn ai_move(host: web::Data<Host>) -> impl Responder {
    match host.opening().await {
        None => HttpResponse::BadRequest().json(Failure::from("training not complete")),
        Some(m) => HttpResponse::Ok().json(m.map(Position::from)),
    }
}

async fn recommend(host: web::Data<Host>, body: web::Json<Recommend>) -> impl Responder {
    let Recommend { board, color } = body.into_inner();
    HttpResponse::Ok().json(host.recommend(&board, color).map(Position::from))
}
