mod geojson;
